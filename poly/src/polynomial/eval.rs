//! Evaluation (`at`), composition (`compose`), and polynomial exponentiation.
//!
//! Grounded on the original implementation's `PolyAt`, `PolyCompose`,
//! `ExactCoefficient`, and `PolyQuickPower`.

use super::arithmetic::{add, mul, scale};
use super::Polynomial;
use poly_core::{wrapping_pow, Coefficient, Exponent};

impl Polynomial {
    /// Evaluates `self` at `x` for its outermost variable, returning a
    /// polynomial one variable shallower.
    pub fn at(&self, x: Coefficient) -> Polynomial {
        match self {
            Polynomial::Coeff(_) => self.clone(),
            Polynomial::Terms(terms) => terms.iter().fold(Polynomial::zero(), |acc, m| {
                let power = wrapping_pow(x, m.exp);
                add(&acc, &scale(&m.poly, power))
            }),
        }
    }

    /// Substitutes a polynomial for each variable of `self`, outermost first.
    ///
    /// `subs[0]` replaces variable `0`, `subs[1]` replaces variable `1`, and so
    /// on. If `subs` is shorter than the number of variables `self` actually
    /// depends on, the missing trailing variables are left unsubstituted and
    /// [`Polynomial::exact_coefficient`] of what remains is returned — matching
    /// the original implementation's behaviour of substituting as many
    /// variables as it is given and then collapsing anything left to its exact
    /// constant term.
    pub fn compose(&self, subs: &[Polynomial]) -> Polynomial {
        if self.is_coeff() {
            return self.clone();
        }
        let terms = match self.terms() {
            Some(terms) => terms,
            None => unreachable!("is_coeff() already handled the Coeff case"),
        };
        if subs.is_empty() {
            return self.exact_coefficient();
        }

        terms.iter().fold(Polynomial::zero(), |acc, m| {
            let composed_coef = m.poly.compose(&subs[1..]);
            if composed_coef.is_zero() {
                acc
            } else {
                let power = quick_power(&subs[0], m.exp);
                add(&acc, &mul(&power, &composed_coef))
            }
        })
    }

    /// The constant term of `self`, treating every remaining variable as `0`.
    ///
    /// Equivalent to `self.at(0)` applied repeatedly until a `Coeff` remains,
    /// but does not pay for the intermediate scaling `at` performs.
    pub fn exact_coefficient(&self) -> Polynomial {
        match self {
            Polynomial::Coeff(_) => self.clone(),
            Polynomial::Terms(terms) => match terms.first() {
                Some(first) if first.exp == 0 => first.poly.exact_coefficient(),
                _ => Polynomial::zero(),
            },
        }
    }
}

/// Raises a polynomial to a non-negative integer power via right-to-left
/// binary exponentiation, mirroring the original implementation's
/// `PolyQuickPower` (itself the polynomial analogue of `QuickPowerTail`).
pub fn quick_power(p: &Polynomial, exponent: Exponent) -> Polynomial {
    assert!(exponent >= 0, "exponent must be non-negative");
    if p.is_zero() {
        return Polynomial::zero();
    }
    if exponent == 0 {
        return Polynomial::from_coeff(1);
    }
    if exponent == 1 {
        return p.clone();
    }
    let half = quick_power(p, exponent / 2);
    let squared = mul(&half, &half);
    if exponent % 2 == 0 {
        squared
    } else {
        mul(&squared, p)
    }
}

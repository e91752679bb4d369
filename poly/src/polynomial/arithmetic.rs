//! `+`, `-`, `*`, unary `-`, and in-place scaling.
//!
//! Grounded on the original implementation's `PolyAdd`/`PolyAddPC`/`PolyAddPP`,
//! `PolyNeg`, `PolySub`, `PolyMul`/`PolyMulM`, and `PolyScaleInplace`, with the
//! zero-elision those functions deferred to `PolySimplifyCoeff` now folded into
//! `simplify_sorted` (see the `polynomial` module docs) so it runs unconditionally
//! rather than only on the two cases the original special-cased.

use core::ops::{Add, Mul, Neg, Sub};

use super::{simplify_sorted, Monomial, Polynomial};
use poly_core::Coefficient;

/// Adds two polynomials.
pub fn add(p: &Polynomial, q: &Polynomial) -> Polynomial {
    match (p, q) {
        (Polynomial::Coeff(a), Polynomial::Coeff(b)) => Polynomial::Coeff(a.wrapping_add(*b)),
        (Polynomial::Coeff(c), Polynomial::Terms(_)) => add_coeff_to_terms(q, *c),
        (Polynomial::Terms(_), Polynomial::Coeff(c)) => add_coeff_to_terms(p, *c),
        (Polynomial::Terms(pt), Polynomial::Terms(qt)) => add_term_lists(pt, qt),
    }
}

/// Adds a scalar `c` to a `Terms` polynomial `p`.
fn add_coeff_to_terms(p: &Polynomial, c: Coefficient) -> Polynomial {
    let terms = p.terms().expect("add_coeff_to_terms called on a Coeff");
    if c == 0 {
        return p.clone();
    }

    let mut merged: Vec<Monomial> = Vec::with_capacity(terms.len() + 1);
    match terms.first() {
        Some(first) if first.exp == 0 => {
            merged.push(Monomial::new(add(&first.poly, &Polynomial::Coeff(c)), 0));
            merged.extend(terms[1..].iter().cloned());
        }
        _ => {
            merged.push(Monomial::new(Polynomial::Coeff(c), 0));
            merged.extend(terms.iter().cloned());
        }
    }
    simplify_sorted(merged)
}

/// Merges two sorted, exponent-unique term lists, adding coefficients at
/// matching exponents.
fn add_term_lists(p: &[Monomial], q: &[Monomial]) -> Polynomial {
    let mut result = Vec::with_capacity(p.len() + q.len());
    let (mut i, mut j) = (0, 0);
    while i < p.len() && j < q.len() {
        match p[i].exp.cmp(&q[j].exp) {
            core::cmp::Ordering::Less => {
                result.push(p[i].clone());
                i += 1;
            }
            core::cmp::Ordering::Greater => {
                result.push(q[j].clone());
                j += 1;
            }
            core::cmp::Ordering::Equal => {
                result.push(Monomial::new(add(&p[i].poly, &q[j].poly), p[i].exp));
                i += 1;
                j += 1;
            }
        }
    }
    result.extend(p[i..].iter().cloned());
    result.extend(q[j..].iter().cloned());
    simplify_sorted(result)
}

/// Negates every coefficient of `p`. Never introduces a new zero coefficient.
pub fn neg(p: &Polynomial) -> Polynomial {
    match p {
        Polynomial::Coeff(c) => Polynomial::Coeff(c.wrapping_neg()),
        Polynomial::Terms(terms) => Polynomial::Terms(
            terms
                .iter()
                .map(|m| Monomial::new(neg(&m.poly), m.exp))
                .collect(),
        ),
    }
}

/// `p - q`.
pub fn sub(p: &Polynomial, q: &Polynomial) -> Polynomial {
    add(p, &neg(q))
}

/// Multiplies two polynomials.
pub fn mul(p: &Polynomial, q: &Polynomial) -> Polynomial {
    match (p, q) {
        (Polynomial::Coeff(k), _) => scale(q, *k),
        (_, Polynomial::Coeff(k)) => scale(p, *k),
        (Polynomial::Terms(_), Polynomial::Terms(qt)) => {
            qt.iter().fold(Polynomial::zero(), |acc, qi| {
                add(&acc, &mul_by_monomial(p, &qi.poly, qi.exp))
            })
        }
    }
}

/// `p * (coef * x^exp)`, i.e. multiplying every term of `p` by one monomial of
/// the other operand and shifting exponents by `exp`.
///
/// Grounded on the original implementation's `PolyMulM`.
fn mul_by_monomial(p: &Polynomial, coef: &Polynomial, exp: poly_core::Exponent) -> Polynomial {
    if coef.is_zero() {
        return Polynomial::zero();
    }
    match p {
        Polynomial::Coeff(_) => {
            let scaled = mul(coef, p);
            if exp == 0 {
                scaled
            } else {
                simplify_sorted(vec![Monomial::new(scaled, exp)])
            }
        }
        Polynomial::Terms(terms) => {
            let shifted = terms
                .iter()
                .map(|m| Monomial::new(mul(&m.poly, coef), m.exp + exp))
                .collect();
            // Exponents stay sorted and unique under a uniform shift; only
            // zero-elision and I4/I5 collapse can still be needed.
            simplify_sorted(shifted)
        }
    }
}

/// Multiplies every coefficient of `p` by the scalar `k`, preserving canonical
/// form even if `k` wraps a previously non-zero coefficient to zero.
pub fn scale(p: &Polynomial, k: Coefficient) -> Polynomial {
    if k == 0 {
        return Polynomial::zero();
    }
    match p {
        Polynomial::Coeff(c) => Polynomial::Coeff(c.wrapping_mul(k)),
        Polynomial::Terms(terms) => {
            let scaled = terms
                .iter()
                .map(|m| Monomial::new(scale(&m.poly, k), m.exp))
                .collect();
            simplify_sorted(scaled)
        }
    }
}

impl Polynomial {
    /// Multiplies every coefficient of `self` by `k` in place; `k = 0`
    /// collapses `self` to zero.
    pub fn scale_in_place(&mut self, k: Coefficient) {
        *self = scale(self, k);
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $free_fn:ident) => {
        impl $trait for Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $free_fn(&self, &rhs)
            }
        }
        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $free_fn(&self, rhs)
            }
        }
        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $free_fn(self, &rhs)
            }
        }
        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $free_fn(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        neg(self)
    }
}

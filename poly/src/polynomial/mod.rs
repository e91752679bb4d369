//! The recursive polynomial value and its canonical form.
//!
//! A [`Polynomial`] is either a [`Polynomial::Coeff`] — a scalar, constant across
//! every variable — or a [`Polynomial::Terms`] list of [`Monomial`]s sorted
//! strictly ascending by exponent, each carrying its own coefficient polynomial
//! one variable deeper.
//!
//! # Canonical form
//!
//! Every `Polynomial` returned by any operation in this crate satisfies:
//!
//! - I1. A `Terms` list is never empty.
//! - I2. Exponents within a `Terms` list strictly increase.
//! - I3. No monomial in a `Terms` list carries a zero coefficient polynomial.
//! - I4. A single-term list `[(p, 0)]` with `p` a `Coeff` is forbidden; it is
//!   represented as `Coeff` directly.
//! - I5. A `Terms` list that would contain only a zero-coefficient term
//!   collapses to the zero `Coeff`.
//!
//! All of I1–I5 are enforced by [`simplify_sorted`], which every constructor in
//! this crate funnels its freshly-built term list through before returning.

mod arithmetic;
mod degree;
mod display;
mod eq;
mod eval;

pub use arithmetic::*;
pub use eval::quick_power;

use poly_core::{Coefficient, Exponent};

/// A multi-variable polynomial with integer coefficients.
///
/// See the [module docs](self) for the canonical-form invariants every value of
/// this type satisfies.
#[derive(Debug, Clone)]
pub enum Polynomial {
    /// A scalar, constant across every variable.
    Coeff(Coefficient),
    /// A term list sorted strictly ascending by exponent (I1, I2).
    Terms(Vec<Monomial>),
}

/// A single term `p * x^e` of a [`Polynomial::Terms`] list.
///
/// `poly` is itself a polynomial, one variable deeper than the list it belongs
/// to: variable `0` of `poly` is variable `1` of the enclosing polynomial, and
/// so on.
#[derive(Debug, Clone)]
pub struct Monomial {
    /// Coefficient of this term, in the next-deeper variable.
    pub poly: Polynomial,
    /// Non-negative exponent of the outer variable for this term.
    pub exp: Exponent,
}

impl Monomial {
    /// Builds a monomial `poly * x^exp`, taking ownership of `poly`.
    pub fn new(poly: Polynomial, exp: Exponent) -> Self {
        Monomial { poly, exp }
    }
}

impl Polynomial {
    /// The zero polynomial, `Coeff(0)`. The unique representation of zero.
    pub fn zero() -> Self {
        Polynomial::Coeff(0)
    }

    /// A polynomial that is constant `c` across every variable.
    pub fn from_coeff(c: Coefficient) -> Self {
        Polynomial::Coeff(c)
    }

    /// True iff `self` is the `Coeff` variant (constant in every variable).
    pub fn is_coeff(&self) -> bool {
        matches!(self, Polynomial::Coeff(_))
    }

    /// True iff `self` is the unique zero polynomial.
    pub fn is_zero(&self) -> bool {
        matches!(self, Polynomial::Coeff(0))
    }

    /// Returns the term list, if `self` is the `Terms` variant.
    pub(crate) fn terms(&self) -> Option<&[Monomial]> {
        match self {
            Polynomial::Terms(terms) => Some(terms),
            Polynomial::Coeff(_) => None,
        }
    }

    /// Constructs a polynomial from a sequence of monomials, taking ownership.
    ///
    /// Sorts by exponent, merges equal exponents by recursively adding their
    /// coefficients, elides zero-coefficient terms, and applies the I4/I5
    /// collapse rules.
    pub fn from_monomials(monos: Vec<Monomial>) -> Self {
        build::from_unsorted(monos)
    }

    /// As [`Polynomial::from_monomials`], but deep-copies each input monomial
    /// instead of consuming it.
    pub fn from_monomials_cloned(monos: &[Monomial]) -> Self {
        build::from_unsorted(monos.to_vec())
    }
}

mod build {
    use super::{add, simplify_sorted, Monomial, Polynomial};

    /// Sorts `terms` ascending by exponent, merges equal exponents by adding
    /// their coefficients, and restores the canonical form (I1–I5).
    ///
    /// Equivalent in effect to the original implementation's merge-sort-based
    /// `PolyFromMonos`, but built on the standard library's sort: safe Rust has
    /// no need to hand-roll the merge step to avoid an extra allocation.
    pub(super) fn from_unsorted(mut terms: Vec<Monomial>) -> Polynomial {
        terms.sort_by_key(|m| m.exp);

        let mut merged: Vec<Monomial> = Vec::with_capacity(terms.len());
        for m in terms {
            match merged.last_mut() {
                Some(last) if last.exp == m.exp => {
                    last.poly = add(&last.poly, &m.poly);
                }
                _ => merged.push(m),
            }
        }

        simplify_sorted(merged)
    }
}

/// Restores the canonical form (I1, I3–I5) of a term list that is already
/// sorted ascending by exponent with unique exponents (I2).
///
/// Filters out zero-coefficient terms (I3), then collapses an empty or
/// single-constant-term list per I4/I5.
fn simplify_sorted(mut terms: Vec<Monomial>) -> Polynomial {
    terms.retain(|m| !m.poly.is_zero());

    match terms.len() {
        0 => Polynomial::zero(),
        1 if terms[0].exp == 0 && terms[0].poly.is_coeff() => terms.pop().unwrap().poly,
        _ => Polynomial::Terms(terms),
    }
}

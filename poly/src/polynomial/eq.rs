//! Structural equality.
//!
//! Grounded on the original implementation's `PolyIsEq`/`PolyIsEqPC`. That
//! implementation defends against a `Terms` list holding stray zero-coefficient
//! or trailing entries that a non-canonical value might carry; this port keeps
//! the same shape of defense even though I3 now holds unconditionally (see the
//! `polynomial` module docs), so the "extra terms must all be zero" branch
//! below is unreachable in practice rather than load-bearing.

use super::{Monomial, Polynomial};
use poly_core::Coefficient;

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Polynomial::Coeff(a), Polynomial::Coeff(b)) => a == b,
            (Polynomial::Coeff(c), Polynomial::Terms(terms)) => eq_coeff_terms(*c, terms),
            (Polynomial::Terms(terms), Polynomial::Coeff(c)) => eq_coeff_terms(*c, terms),
            (Polynomial::Terms(a), Polynomial::Terms(b)) => eq_term_lists(a, b),
        }
    }
}

fn eq_coeff_terms(c: Coefficient, terms: &[Monomial]) -> bool {
    match terms.first() {
        Some(first) if first.exp == 0 => {
            first.poly == Polynomial::Coeff(c) && terms[1..].iter().all(|m| m.poly.is_zero())
        }
        _ => false,
    }
}

fn eq_term_lists(a: &[Monomial], b: &[Monomial]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].exp.cmp(&b[j].exp) {
            core::cmp::Ordering::Equal => {
                if a[i].poly != b[j].poly {
                    return false;
                }
                i += 1;
                j += 1;
            }
            core::cmp::Ordering::Less => {
                if !a[i].poly.is_zero() {
                    return false;
                }
                i += 1;
            }
            core::cmp::Ordering::Greater => {
                if !b[j].poly.is_zero() {
                    return false;
                }
                j += 1;
            }
        }
    }
    a[i..].iter().all(|m| m.poly.is_zero()) && b[j..].iter().all(|m| m.poly.is_zero())
}

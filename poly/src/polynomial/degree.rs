//! `deg` and `deg_by`.
//!
//! Grounded on the original implementation's `PolyDeg`/`PolyDegBy`. Both walk
//! the term list once; the zero-skip checks they perform are defense against a
//! non-canonical value reaching them, since I3 already guarantees every stored
//! term carries a non-zero coefficient.

use super::Polynomial;
use poly_core::{Exponent, VarIndex};

impl Polynomial {
    /// Total degree: the zero polynomial has degree `-1`, any other `Coeff` has
    /// degree `0`, and a `Terms` list has degree `max(term.poly.deg() + term.exp)`.
    pub fn deg(&self) -> Exponent {
        match self {
            Polynomial::Coeff(c) if *c == 0 => -1,
            Polynomial::Coeff(_) => 0,
            Polynomial::Terms(terms) => terms
                .iter()
                .filter(|m| !m.poly.is_zero())
                .map(|m| m.poly.deg() + m.exp)
                .max()
                .expect("Terms list is non-empty with no zero coefficients (I1, I3)"),
        }
    }

    /// Degree with respect to variable `var`, `0` being the outermost variable.
    ///
    /// The zero polynomial has degree `-1` in every variable; any other `Coeff`
    /// has degree `0` in every variable (it does not depend on any of them).
    pub fn deg_by(&self, var: VarIndex) -> Exponent {
        if self.is_zero() {
            return -1;
        }
        let terms = match self.terms() {
            Some(terms) => terms,
            None => return 0,
        };
        if var == 0 {
            terms
                .iter()
                .rev()
                .find(|m| !m.poly.is_zero())
                .map(|m| m.exp)
                .expect("Terms list is non-empty with no zero coefficients (I1, I3)")
        } else {
            terms
                .iter()
                .map(|m| m.poly.deg_by(var - 1))
                .max()
                .unwrap_or(0)
        }
    }
}

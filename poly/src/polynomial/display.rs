//! Wire-format rendering.
//!
//! Grounded on the original implementation's `PolyPrint`: a `Coeff` prints as
//! its decimal value, a `Terms` list prints as its monomials joined by `+`, each
//! monomial as `(<coefficient>,<exponent>)`. No trailing newline.

use core::fmt;

use super::Polynomial;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polynomial::Coeff(c) => write!(f, "{c}"),
            Polynomial::Terms(terms) => {
                let mut first = true;
                for m in terms {
                    if m.poly.is_zero() {
                        // Defensive: I3 guarantees this never happens for a
                        // canonically-built value.
                        continue;
                    }
                    if !first {
                        write!(f, "+")?;
                    }
                    write!(f, "({},{})", m.poly, m.exp)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

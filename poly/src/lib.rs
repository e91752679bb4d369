//! Recursive multi-variable polynomial algebra with integer coefficients.
//!
//! A [`Polynomial`] is, recursively, either a scalar coefficient or a sorted list
//! of [`Monomial`]s whose own coefficients are themselves polynomials in the next
//! variable. The type enforces its own canonical form (see the `polynomial`
//! module docs for the invariants) so that every value a caller observes — built
//! by construction, arithmetic, evaluation, or composition — is already in that
//! form.
//!
//! This crate has no fallible operations: preconditions (non-negative exponents,
//! meaningful variable indices) are enforced with `assert!`/`debug_assert!`, not
//! `Result`. Callers driving this library from untrusted input are expected to
//! validate before calling in, exactly as the calculator stack in `poly-calc`
//! does.

pub mod polynomial;

pub use polynomial::{Monomial, Polynomial};
pub use poly_core::{Coefficient, Exponent, VarIndex};

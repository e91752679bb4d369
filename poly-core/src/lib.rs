#![cfg_attr(not(test), no_std)]
//! Scalar arithmetic shared by the polynomial algebra and the calculator stack.
//!
//! This crate is the leaf of the workspace: it knows nothing about polynomials,
//! monomials, or the stack machine. It only fixes the numeric types the rest of
//! the workspace builds on and the one non-trivial scalar algorithm both of them
//! need — fast exponentiation.

/// Coefficient scalar. At least 64 bits wide, signed.
///
/// Arithmetic on `Coefficient` wraps on overflow (two's-complement), matching the
/// original implementation's behaviour on pathological inputs rather than
/// panicking or saturating. Command arguments are never built from this
/// wrapping arithmetic: `poly-cli` reads them with [`str::parse`], which
/// rejects an out-of-range literal as a parse failure (the corresponding
/// `WRONG VALUE`/`WRONG VARIABLE`/`WRONG COUNT` diagnostic) rather than
/// silently wrapping it into range.
pub type Coefficient = i64;

/// Monomial/degree exponent. At least 32 bits wide, signed so that `-1` can denote
/// "degree of the zero polynomial".
pub type Exponent = i32;

/// Index of a variable in the nested polynomial representation, `0` being the
/// outermost variable.
pub type VarIndex = u32;

/// Raises `base` to the non-negative power `exponent`, wrapping on overflow.
///
/// Uses right-to-left binary exponentiation (the same shape as the tail-recursive
/// `QuickPowerTail` of the original implementation), so it runs in
/// `O(log exponent)` multiplications rather than `O(exponent)`.
///
/// # Panics
///
/// Panics if `exponent` is negative — exponents reaching this function are always
/// monomial exponents, which are non-negative by construction (I2).
pub fn wrapping_pow(base: Coefficient, exponent: Exponent) -> Coefficient {
    assert!(exponent >= 0, "exponent must be non-negative");
    let mut base = base;
    let mut exponent = exponent as u32;
    let mut accumulator: Coefficient = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            accumulator = accumulator.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    accumulator
}

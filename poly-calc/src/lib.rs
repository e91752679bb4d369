//! The calculator's value stack and the line-driven loop that runs it.
//!
//! This crate is still "core" per the component boundary this workspace
//! draws: it knows about stack operations and line-by-line driving, but
//! nothing about how a line of text turns into a [`driver::LineOutcome`] —
//! that tokenizing/parsing job belongs to `poly-cli`, reached only through
//! [`driver::LineSource`].

pub mod driver;
pub mod stack;

pub use driver::{Driver, LineOutcome, LineSource, ResumeMode};
pub use stack::{CalculatorStack, Operation};

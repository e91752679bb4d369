//! Command-line front end for the polynomial calculator: tokenizes and
//! parses each input line and feeds the result to `poly-calc`'s driver.
//!
//! # Textual polynomial form
//!
//! A coefficient polynomial is its signed decimal integer. A non-coefficient
//! polynomial is a `+`-joined sequence of monomials, each
//! `(<inner polynomial>,<exponent>)`. No spaces, no trailing newline.
//!
//! # Command set
//!
//! Case-sensitive: `ZERO`, `IS_COEFF`, `IS_ZERO`, `CLONE`, `ADD`, `MUL`,
//! `NEG`, `SUB`, `IS_EQ`, `DEG`, `DEG_BY <uint>`, `AT <int>`, `PRINT`, `POP`,
//! `COMPOSE <uint>`. An argument is separated from the command by a single
//! space.
//!
//! Boolean queries (`IS_COEFF`, `IS_ZERO`, `IS_EQ`) write `0` or `1`. `DEG`/
//! `DEG_BY` write an integer (`-1` for the zero polynomial). `PRINT` writes
//! the textual form. Each followed by a newline.
//!
//! # Diagnostics
//!
//! | condition | message |
//! |---|---|
//! | malformed polynomial literal | `ERROR <line> <column>` |
//! | unknown/invalid command | `ERROR <line> WRONG COMMAND` |
//! | `AT` missing/malformed argument | `ERROR <line> WRONG VALUE` |
//! | `DEG_BY` missing/malformed argument | `ERROR <line> WRONG VARIABLE` |
//! | `COMPOSE` missing/malformed argument | `ERROR <line> WRONG COUNT` |
//! | command with insufficient operands | `ERROR <line> STACK UNDERFLOW` |
//!
//! `<line>` is 1-based.

pub mod command;
pub mod error;
pub mod literal;
pub mod source;

pub use error::{CliError, ParseError};
pub use source::LineReader;

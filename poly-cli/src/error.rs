//! Diagnostic wire format and CLI-level errors.
//!
//! Grounded on the external-interface diagnostic table: one variant per row,
//! rendered by `thiserror`'s `#[error(...)]` so the structured error and its
//! textual form live next to each other instead of being scattered across
//! call sites (mirrors `errors.rs` in the wider example pack).

use thiserror::Error;

/// A per-line parse-time diagnostic, in the exact wire format the result
/// consumer expects (see the `poly-cli` module docs for the table).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("ERROR {line} {column}")]
    MalformedLiteral { line: usize, column: usize },

    #[error("ERROR {line} WRONG COMMAND")]
    WrongCommand { line: usize },

    #[error("ERROR {line} WRONG VALUE")]
    WrongValue { line: usize },

    #[error("ERROR {line} WRONG VARIABLE")]
    WrongVariable { line: usize },

    #[error("ERROR {line} WRONG COUNT")]
    WrongCount { line: usize },
}

/// A failure in starting the program, reported as a process exit code rather
/// than a diagnostic line.
///
/// The "invalid invocation" exit code (1) of the invocation shell's contract
/// is owned entirely by `clap`: `Args::try_parse()` rejects too many
/// arguments (or any other malformed command line) before `run()` is ever
/// called, so there is no invocation-shape failure left for this enum to
/// represent. This type only covers failures that occur once `run()` has a
/// validated `Args` in hand.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to open {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

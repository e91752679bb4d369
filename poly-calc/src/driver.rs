//! The line-by-line driver loop, decoupled from any concrete lexer/parser.
//!
//! Grounded on the original implementation's `Parser`/`ParserExecuteAll`: the
//! driver owns the stack and decides, per line, whether to push a value,
//! execute a command, or forward a pre-formatted diagnostic — it never
//! tokenizes or parses text itself. That's `poly-cli`'s job, reached through
//! the [`LineSource`] trait.

use std::io::{self, Write};

use poly::{Coefficient, Polynomial, VarIndex};

use crate::stack::{CalculatorStack, Operation, RequiredArg};

/// What a single line of input resolved to.
///
/// Produced by an external lexer/parser (see `poly-cli`); the driver only
/// consumes these, it never derives them.
pub enum LineOutcome {
    /// The line was a polynomial literal to push onto the stack.
    Push(Polynomial),
    /// The line was a recognized command, optionally carrying its argument.
    Execute {
        op: Operation,
        uint_arg: Option<VarIndex>,
        coeff_arg: Option<Coefficient>,
    },
    /// The line failed to parse, or named an unrecognized command; this is
    /// already the exact wire-format text to emit (see the `poly-cli`
    /// diagnostic table), the driver does not reinterpret it.
    Diagnostic(String),
}

/// Something that can produce a [`LineOutcome`] for each line of input, with
/// its 1-based line number.
pub trait LineSource {
    /// Returns the next line's outcome, or `None` at end of input.
    fn next_outcome(&mut self) -> Option<(usize, LineOutcome)>;
}

/// Whether the driver stops at the first diagnostic or keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeMode {
    /// Keep processing lines after a diagnostic (`error_resume_next` in the
    /// original `ParserExecuteAll`).
    ResumeNext,
    /// Stop at the first diagnostic.
    Fatal,
}

/// Runs a [`LineSource`] against a [`CalculatorStack`], writing results to
/// `result_out` and diagnostics to `diag_out`.
pub struct Driver {
    stack: CalculatorStack,
    resume_mode: ResumeMode,
    saw_diagnostic: bool,
}

impl Driver {
    pub fn new(resume_mode: ResumeMode) -> Self {
        Driver {
            stack: CalculatorStack::new(),
            resume_mode,
            saw_diagnostic: false,
        }
    }

    /// True iff at least one diagnostic (parse-time or stack-underflow) has
    /// been emitted so far. The invocation shell uses this to pick exit code
    /// `3` vs `0`.
    pub fn saw_diagnostic(&self) -> bool {
        self.saw_diagnostic
    }

    /// Drives `source` to completion (or to the first diagnostic, in
    /// [`ResumeMode::Fatal`]), writing to `result_out`/`diag_out`.
    pub fn run(
        &mut self,
        source: &mut impl LineSource,
        result_out: &mut impl Write,
        diag_out: &mut impl Write,
    ) -> io::Result<()> {
        while let Some((line_no, outcome)) = source.next_outcome() {
            match outcome {
                LineOutcome::Push(poly) => {
                    tracing::debug!(line = line_no, "pushed");
                    self.stack.push(poly);
                }
                LineOutcome::Execute {
                    op,
                    uint_arg,
                    coeff_arg,
                } => {
                    self.set_registers(op, uint_arg, coeff_arg);
                    if self.stack.can_execute(op) {
                        tracing::debug!(line = line_no, op = ?op, "executed");
                        self.stack.execute(op, result_out)?;
                    } else {
                        tracing::debug!(line = line_no, op = ?op, "stack underflow");
                        writeln!(diag_out, "ERROR {line_no} STACK UNDERFLOW")?;
                        self.saw_diagnostic = true;
                        if self.resume_mode == ResumeMode::Fatal {
                            return Ok(());
                        }
                    }
                }
                LineOutcome::Diagnostic(message) => {
                    tracing::debug!(line = line_no, message = %message, "diagnostic");
                    writeln!(diag_out, "{message}")?;
                    self.saw_diagnostic = true;
                    if self.resume_mode == ResumeMode::Fatal {
                        return Ok(());
                    }
                }
            }
        }
        Ok(())
    }

    fn set_registers(&mut self, op: Operation, uint_arg: Option<VarIndex>, coeff_arg: Option<Coefficient>) {
        match op.required_arg() {
            RequiredArg::Uint => {
                if let Some(value) = uint_arg {
                    self.stack.set_uint_arg(value);
                }
            }
            RequiredArg::Coeff => {
                if let Some(value) = coeff_arg {
                    self.stack.set_coeff_arg(value);
                }
            }
            RequiredArg::None => {}
        }
    }
}

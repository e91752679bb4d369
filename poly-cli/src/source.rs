//! Adapts a line-oriented input stream into the [`LineSource`] the driver
//! consumes, classifying each line via [`literal::looks_like_literal`].

use std::io::BufRead;

use poly_calc::{LineOutcome, LineSource};

use crate::command::parse_command;
use crate::error::ParseError;
use crate::literal::{looks_like_literal, parse_literal};

/// Reads lines from any [`BufRead`], turning each into a [`LineOutcome`].
pub struct LineReader<R> {
    lines: std::io::Lines<R>,
    next_line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            lines: reader.lines(),
            next_line_no: 1,
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_outcome(&mut self) -> Option<(usize, LineOutcome)> {
        let raw = self.lines.next()?;
        let line_no = self.next_line_no;
        self.next_line_no += 1;

        let text = match raw {
            Ok(text) => text,
            Err(_) => return Some((line_no, LineOutcome::Diagnostic(io_read_error(line_no)))),
        };

        Some((line_no, classify(line_no, &text)))
    }
}

fn io_read_error(line_no: usize) -> String {
    // A byte stream that isn't valid UTF-8 can't name a column; report it at
    // the start of the line, same shape as any other malformed literal.
    ParseError::MalformedLiteral { line: line_no, column: 0 }.to_string()
}

fn classify(line_no: usize, text: &str) -> LineOutcome {
    if looks_like_literal(text) {
        match parse_literal(text) {
            Ok(poly) => LineOutcome::Push(poly),
            Err(column) => LineOutcome::Diagnostic(
                ParseError::MalformedLiteral {
                    line: line_no,
                    column: column + 1,
                }
                .to_string(),
            ),
        }
    } else {
        match parse_command(line_no, text) {
            Ok(cmd) => LineOutcome::Execute {
                op: cmd.op,
                uint_arg: cmd.uint_arg,
                coeff_arg: cmd.coeff_arg,
            },
            Err(err) => LineOutcome::Diagnostic(err.to_string()),
        }
    }
}

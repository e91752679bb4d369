//! Parses a non-literal line into an [`Operation`] plus its argument, or a
//! [`ParseError`].
//!
//! Grounded on the external interface's command set (§6): a case-sensitive
//! command name, optionally followed by a single space and an argument whose
//! shape depends on the command (`DEG_BY`/`COMPOSE` take an unsigned integer,
//! `AT` takes a signed integer). A command that takes no argument but is
//! given one, or one that needs an argument but lacks or malforms it, is
//! reported as the corresponding diagnostic row — never silently ignored.

use poly_calc::Operation;
use poly_core::{Coefficient, VarIndex};

use crate::error::ParseError;

/// The result of successfully parsing a command line.
pub struct Command {
    pub op: Operation,
    pub uint_arg: Option<VarIndex>,
    pub coeff_arg: Option<Coefficient>,
}

pub fn parse_command(line: usize, text: &str) -> Result<Command, ParseError> {
    let (name, arg) = match text.split_once(' ') {
        Some((name, arg)) => (name, Some(arg)),
        None => (text, None),
    };

    let op = Operation::from_name(name);
    if op == Operation::Invalid {
        return Err(ParseError::WrongCommand { line });
    }

    match op {
        Operation::DegBy => {
            let value = arg
                .and_then(|a| a.parse::<VarIndex>().ok())
                .ok_or(ParseError::WrongVariable { line })?;
            Ok(Command {
                op,
                uint_arg: Some(value),
                coeff_arg: None,
            })
        }
        Operation::Compose => {
            let value = arg
                .and_then(|a| a.parse::<VarIndex>().ok())
                .ok_or(ParseError::WrongCount { line })?;
            Ok(Command {
                op,
                uint_arg: Some(value),
                coeff_arg: None,
            })
        }
        Operation::At => {
            let value = arg
                .and_then(|a| a.parse::<Coefficient>().ok())
                .ok_or(ParseError::WrongValue { line })?;
            Ok(Command {
                op,
                uint_arg: None,
                coeff_arg: Some(value),
            })
        }
        _ if arg.is_some() => Err(ParseError::WrongCommand { line }),
        _ => Ok(Command {
            op,
            uint_arg: None,
            coeff_arg: None,
        }),
    }
}

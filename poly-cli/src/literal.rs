//! Recursive-descent parser for the compact polynomial literal grammar:
//!
//! ```text
//! poly := int | term ('+' term)*
//! term := '(' poly ',' uint ')'
//! int  := '-'? digit+
//! uint := digit+
//! ```
//!
//! No whitespace is permitted anywhere inside a literal. Grounded on the
//! external interface's textual polynomial form (§6 of the specification);
//! this is the inverse of `poly`'s `Display` impl.

use poly::{Coefficient, Exponent, Monomial, Polynomial};

/// Byte offset (0-based) of the character a malformed literal failed at.
/// The caller adds 1 to report a 1-based column.
pub type Column = usize;

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn expect(&mut self, byte: u8) -> Result<(), Column> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.pos)
        }
    }

    fn parse_digits(&mut self) -> Result<&'a str, Column> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            Err(start)
        } else {
            Ok(std::str::from_utf8(&self.bytes[start..self.pos]).expect("ascii digits are valid utf8"))
        }
    }

    fn parse_int(&mut self) -> Result<Coefficient, Column> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.parse_digits()?;
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).expect("ascii is valid utf8");
        text.parse::<Coefficient>().map_err(|_| start)
    }

    fn parse_uint(&mut self) -> Result<Exponent, Column> {
        let start = self.pos;
        let digits = self.parse_digits()?;
        digits.parse::<Exponent>().map_err(|_| start)
    }

    fn parse_poly(&mut self) -> Result<Polynomial, Column> {
        if self.peek() == Some(b'(') {
            self.parse_term_list()
        } else {
            self.parse_int().map(Polynomial::from_coeff)
        }
    }

    fn parse_term_list(&mut self) -> Result<Polynomial, Column> {
        let mut terms = vec![self.parse_term()?];
        while self.peek() == Some(b'+') {
            self.pos += 1;
            terms.push(self.parse_term()?);
        }
        Ok(Polynomial::from_monomials(terms))
    }

    fn parse_term(&mut self) -> Result<Monomial, Column> {
        self.expect(b'(')?;
        let inner = self.parse_poly()?;
        self.expect(b',')?;
        let exp = self.parse_uint()?;
        self.expect(b')')?;
        Ok(Monomial::new(inner, exp))
    }
}

/// Parses an entire line as a polynomial literal. Any trailing, unconsumed
/// character (including trailing whitespace) is itself a malformed literal.
pub fn parse_literal(line: &str) -> Result<Polynomial, Column> {
    let mut cursor = Cursor::new(line);
    let poly = cursor.parse_poly()?;
    if cursor.pos == cursor.bytes.len() {
        Ok(poly)
    } else {
        Err(cursor.pos)
    }
}

/// True iff `line` looks like a polynomial literal rather than a command —
/// i.e. it starts with a digit, `-`, or `(`.
pub fn looks_like_literal(line: &str) -> bool {
    matches!(line.as_bytes().first(), Some(b) if b.is_ascii_digit() || *b == b'-' || *b == b'(')
}

//! The calculator's value stack and its operation set.
//!
//! Grounded on the original implementation's `calculator_stack.h`/`.c`:
//! segmented chunk storage (`HUNK_SIZE`, matching `CS_HUNK_SIZE`), the
//! `CSOperation` enum, `CSOperationFromString`, `CSCanExecute`, and `CSExecute`.

use std::io::{self, Write};

use poly::{Coefficient, Polynomial, VarIndex};

/// Number of slots per storage chunk. Matches the original's `CS_HUNK_SIZE`.
const HUNK_SIZE: usize = 254;

struct Hunk {
    slots: Vec<Polynomial>,
}

impl Hunk {
    fn new() -> Self {
        Hunk {
            slots: Vec::with_capacity(HUNK_SIZE),
        }
    }

    fn is_full(&self) -> bool {
        self.slots.len() == HUNK_SIZE
    }
}

/// A command recognized by the calculator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy,
    At,
    Print,
    Pop,
    Compose,
    Invalid,
}

impl Operation {
    /// Looks up a command name, case-sensitive, exactly as it would appear in
    /// calculator input. Unrecognized names map to [`Operation::Invalid`]
    /// rather than failing — the caller decides whether that's an error.
    pub fn from_name(name: &str) -> Operation {
        match name {
            "ZERO" => Operation::Zero,
            "IS_COEFF" => Operation::IsCoeff,
            "IS_ZERO" => Operation::IsZero,
            "CLONE" => Operation::Clone,
            "ADD" => Operation::Add,
            "MUL" => Operation::Mul,
            "NEG" => Operation::Neg,
            "SUB" => Operation::Sub,
            "IS_EQ" => Operation::IsEq,
            "DEG" => Operation::Deg,
            "DEG_BY" => Operation::DegBy,
            "AT" => Operation::At,
            "PRINT" => Operation::Print,
            "POP" => Operation::Pop,
            "COMPOSE" => Operation::Compose,
            _ => Operation::Invalid,
        }
    }

    /// True iff this operation takes a `DEG_BY`/`COMPOSE`-style unsigned
    /// argument from [`CalculatorStack::set_uint_arg`].
    fn takes_uint_arg(self) -> bool {
        matches!(self, Operation::DegBy | Operation::Compose)
    }

    /// True iff this operation takes an `AT`-style coefficient argument from
    /// [`CalculatorStack::set_coeff_arg`].
    fn takes_coeff_arg(self) -> bool {
        matches!(self, Operation::At)
    }
}

/// The calculator's value stack: a segmented chain of fixed-size chunks plus
/// the scratch registers used by parameterized operations.
///
/// Grounded on the original's `CalculatorStack` struct.
pub struct CalculatorStack {
    hunks: Vec<Hunk>,
    size: usize,
    uint_arg: VarIndex,
    coeff_arg: Coefficient,
}

impl CalculatorStack {
    /// An empty stack with its scratch registers zeroed.
    pub fn new() -> Self {
        CalculatorStack {
            hunks: vec![Hunk::new()],
            size: 0,
            uint_arg: 0,
            coeff_arg: 0,
        }
    }

    /// Number of values currently on the stack.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Sets the register `DEG_BY` and `COMPOSE` read their argument from.
    ///
    /// Unchecked: setting it does not validate that the next operation needs
    /// it, and not setting it before a parameterized op leaves the previous
    /// value in place (a documented contract, not a bug — see the `poly-calc`
    /// module docs).
    pub fn set_uint_arg(&mut self, value: VarIndex) {
        self.uint_arg = value;
    }

    /// Sets the register `AT` reads its evaluation point from.
    pub fn set_coeff_arg(&mut self, value: Coefficient) {
        self.coeff_arg = value;
    }

    /// Takes ownership of `poly`, placing it on top of the stack.
    pub fn push(&mut self, poly: Polynomial) {
        if self.hunks.last().expect("at least one hunk always exists").is_full() {
            self.hunks.push(Hunk::new());
        }
        self.hunks.last_mut().unwrap().slots.push(poly);
        self.size += 1;
    }

    fn pop(&mut self) -> Polynomial {
        assert!(self.size > 0, "pop on empty stack");
        let top = self.hunks.last_mut().expect("at least one hunk always exists");
        let value = top.slots.pop().expect("top hunk is non-empty while size > 0");
        if top.slots.is_empty() && self.hunks.len() > 1 {
            self.hunks.pop();
        }
        self.size -= 1;
        value
    }

    fn top(&self) -> &Polynomial {
        assert!(self.size > 0, "top on empty stack");
        self.hunks
            .last()
            .and_then(|h| h.slots.last())
            .expect("top hunk holds the top value while size > 0")
    }

    fn top_mut(&mut self) -> &mut Polynomial {
        assert!(self.size > 0, "top on empty stack");
        self.hunks
            .last_mut()
            .and_then(|h| h.slots.last_mut())
            .expect("top hunk holds the top value while size > 0")
    }

    /// True iff the stack currently has enough values for `op`.
    pub fn can_execute(&self, op: Operation) -> bool {
        match op {
            Operation::Invalid => false,
            Operation::Zero => true,
            Operation::IsCoeff
            | Operation::IsZero
            | Operation::Clone
            | Operation::Neg
            | Operation::Deg
            | Operation::DegBy
            | Operation::At
            | Operation::Print
            | Operation::Pop => self.size > 0,
            Operation::Add | Operation::Mul | Operation::Sub | Operation::IsEq => self.size > 1,
            Operation::Compose => self.size > self.uint_arg as usize,
        }
    }

    /// Applies `op`, writing any textual result to `out`.
    ///
    /// # Panics
    ///
    /// Panics (via `debug_assert!`) if `can_execute(op)` is false. The caller
    /// (the driver) is responsible for checking first.
    pub fn execute(&mut self, op: Operation, out: &mut impl Write) -> io::Result<()> {
        debug_assert!(self.can_execute(op), "execute called on a forbidden transition");
        match op {
            Operation::Invalid => Ok(()),
            Operation::Zero => {
                self.push(Polynomial::zero());
                Ok(())
            }
            Operation::IsCoeff => writeln!(out, "{}", self.top().is_coeff() as i32),
            Operation::IsZero => writeln!(out, "{}", self.top().is_zero() as i32),
            Operation::Clone => {
                let cloned = self.top().clone();
                self.push(cloned);
                Ok(())
            }
            Operation::Add => {
                self.binary_op(|x, y| x + y);
                Ok(())
            }
            Operation::Mul => {
                self.binary_op(|x, y| x * y);
                Ok(())
            }
            Operation::Sub => {
                self.binary_op(|x, y| x - y);
                Ok(())
            }
            Operation::Neg => {
                self.top_mut().scale_in_place(-1);
                Ok(())
            }
            Operation::IsEq => {
                let x = self.pop();
                let y = self.pop();
                writeln!(out, "{}", (x == y) as i32)?;
                self.push(y);
                self.push(x);
                Ok(())
            }
            Operation::Deg => writeln!(out, "{}", self.top().deg()),
            Operation::DegBy => writeln!(out, "{}", self.top().deg_by(self.uint_arg)),
            Operation::At => {
                let top = self.pop();
                self.push(top.at(self.coeff_arg));
                Ok(())
            }
            Operation::Print => writeln!(out, "{}", self.top()),
            Operation::Pop => {
                self.pop();
                Ok(())
            }
            Operation::Compose => {
                let base = self.pop();
                let subs: Vec<Polynomial> = (0..self.uint_arg).map(|_| self.pop()).collect();
                self.push(base.compose(&subs));
                Ok(())
            }
        }
    }

    /// Pops the top two values (`x` on top, `y` below) and pushes `f(x, y)`.
    ///
    /// Grounded on the original's `CSBinaryOperator`: note the operand order —
    /// the most recently pushed value is the first argument.
    fn binary_op(&mut self, f: impl FnOnce(Polynomial, Polynomial) -> Polynomial) {
        let x = self.pop();
        let y = self.pop();
        self.push(f(x, y));
    }
}

impl Default for CalculatorStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Operation {
    /// Convenience used by the driver to know which register (if any) must be
    /// set before this operation runs.
    pub fn required_arg(self) -> RequiredArg {
        if self.takes_uint_arg() {
            RequiredArg::Uint
        } else if self.takes_coeff_arg() {
            RequiredArg::Coeff
        } else {
            RequiredArg::None
        }
    }
}

/// Which scratch register (if any) an [`Operation`] consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredArg {
    None,
    Uint,
    Coeff,
}

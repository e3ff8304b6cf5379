//! Dice expression tokens and parsed specifications.

use std::fmt;

use crate::error::dice::DiceError;

/// Binary arithmetic operator allowed in a dice suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Binding strength; `+ -` bind looser than `* /`.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div => 1,
        }
    }

    /// Applies the operator with floating point semantics.
    ///
    /// # Returns
    /// - `Ok(f64)` - Result of `lhs <op> rhs`
    /// - `Err(DiceError::ArithmeticError)` - Division by zero
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, DiceError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => {
                Err(DiceError::ArithmeticError("division by zero".to_string()))
            }
            Self::Div => Ok(lhs / rhs),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

/// One lexical unit of a dice suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Operator),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", crate::util::number::format_number(*n)),
            Self::Op(op) => write!(f, "{}", op.symbol()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// A parsed `NdM<suffix>` expression.
///
/// Constructed once per invocation and never mutated; every roll evaluates its own copy of
/// `tokens` with the rolled value spliced in front.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceSpec {
    /// Number of dice to roll, always at least 1.
    pub roll_count: u32,
    /// Sides per die, always at least 1.
    pub die_size: u32,
    /// Suffix tokens with trailing operators already trimmed.
    pub tokens: Vec<Token>,
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.roll_count, self.die_size)?;
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Outcome of rolling a [`DiceSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct RollOutcome {
    /// Normalised expression that was rolled.
    pub spec: DiceSpec,
    /// Raw die faces in roll order.
    pub rolls: Vec<u32>,
    /// Suffix applied to each face, in roll order.
    pub results: Vec<f64>,
}

impl RollOutcome {
    pub fn total(&self) -> f64 {
        self.results.iter().sum()
    }
}

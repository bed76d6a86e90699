use crate::{
    split::{SplitError, TokenPair},
    Decomposer,
};
use smol_str::SmolStr;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};

/// The arithmetic operation on the left hand side of an [`Equation`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
}

impl Operator {
    /// Figure out which operator some text uses.
    ///
    /// A `+` anywhere in the text wins, otherwise we assume it's a `-` and let
    /// splitting complain if there isn't one.
    pub fn detect(text: &str) -> Operator {
        if text.contains('+') {
            Operator::Plus
        } else {
            Operator::Minus
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
        }
    }

    /// Apply the operator, returning `None` on overflow.
    pub fn apply(self, left: i32, right: i32) -> Option<i32> {
        match self {
            Operator::Plus => left.checked_add(right),
            Operator::Minus => left.checked_sub(right),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An equation of the form `first op second = result`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    pub first: i32,
    pub op: Operator,
    pub second: i32,
    pub result: i32,
}

impl Equation {
    pub fn new(first: i32, op: Operator, second: i32, result: i32) -> Self {
        Equation {
            first,
            op,
            second,
            result,
        }
    }

    /// Calculate the left hand side, `first op second`.
    pub fn evaluate(&self) -> Option<i32> {
        self.op.apply(self.first, self.second)
    }

    /// Does the left hand side actually equal the right hand side?
    pub fn holds(&self) -> bool { self.evaluate() == Some(self.result) }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.first, self.op, self.second, self.result
        )
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decomposer::default().decompose(s)
    }
}

/// Break an expression into its operands using a particular splitting
/// strategy.
pub(crate) fn decompose<F>(src: &str, split: F) -> Result<Equation, ParseError>
where
    F: for<'a> Fn(&'a str, char) -> Result<TokenPair<'a>, SplitError>,
{
    let (left_side, result) = split(src, '=')?.into_tuple();

    let op = Operator::detect(left_side);
    let (first, second) = split(left_side, op.as_char())?.into_tuple();

    Ok(Equation {
        first: parse_integer(first)?,
        op,
        second: parse_integer(second)?,
        result: parse_integer(result)?,
    })
}

fn parse_integer(text: &str) -> Result<i32, ParseError> {
    text.parse().map_err(|reason| ParseError::InvalidInteger {
        text: text.into(),
        reason,
    })
}

/// The broad categories of failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token isn't a valid base-10 integer.
    InvalidFormat,
    /// A separator was missing or in a position where the text around it
    /// can't be extracted.
    OutOfRange,
}

/// Possible errors that may occur while decomposing an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Split(SplitError),
    InvalidInteger { text: SmolStr, reason: ParseIntError },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Split(inner) => inner.kind(),
            ParseError::InvalidInteger { .. } => ErrorKind::InvalidFormat,
        }
    }
}

impl From<SplitError> for ParseError {
    fn from(e: SplitError) -> Self { ParseError::Split(e) }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Split(_) => write!(f, "Unable to split the expression"),
            ParseError::InvalidInteger { text, .. } => {
                write!(f, "\"{}\" isn't a valid integer", text)
            },
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Split(inner) => Some(inner),
            ParseError::InvalidInteger { reason, .. } => Some(reason),
        }
    }
}

//! Splitting an expression into the text either side of a separator.

use crate::equations::ErrorKind;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The two pieces of text surrounding a separator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TokenPair<'a> {
    pub left: &'a str,
    pub right: &'a str,
}

impl<'a> TokenPair<'a> {
    pub fn into_tuple(self) -> (&'a str, &'a str) { (self.left, self.right) }
}

/// How the padding around a separator gets stripped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Padding {
    /// Assume exactly one character of padding on each side of the separator
    /// and cut at fixed offsets. See [`split_exp()`].
    Fixed,
    /// Split at the separator and trim whitespace from both halves.
    Trim,
}

impl Padding {
    pub fn split(
        self,
        exp: &str,
        sep: char,
    ) -> Result<TokenPair<'_>, SplitError> {
        match self {
            Padding::Fixed => split_exp(exp, sep),
            Padding::Trim => split_trimmed(exp, sep),
        }
    }
}

impl Default for Padding {
    fn default() -> Self { Padding::Trim }
}

/// Split `exp` around the first `sep` using fixed offsets.
///
/// If the separator is at byte `index`, the left half is `exp[..index - 1]`
/// and the right half is `exp[index + 2..]`. That drops the character
/// immediately before *and* after the separator, so `"12 + 5"` splits on
/// `'+'` into `"12"` and `"5"`, but unpadded text loses a character on each
/// side:
///
/// ```rust
/// # use equation_split::split_exp;
/// let pair = split_exp("12+5=17", '+').unwrap();
/// assert_eq!(pair.into_tuple(), ("1", "=17"));
/// ```
pub fn split_exp(exp: &str, sep: char) -> Result<TokenPair<'_>, SplitError> {
    let index = exp
        .find(sep)
        .ok_or(SplitError::MissingSeparator { separator: sep })?;

    let out_of_range = SplitError::OutOfRange {
        separator: sep,
        index,
    };

    // a separator in the first position has no padding to strip
    let left_end = index.checked_sub(1).ok_or_else(|| out_of_range.clone())?;
    let left = exp.get(..left_end).ok_or_else(|| out_of_range.clone())?;
    let right = exp.get(index + 2..).ok_or(out_of_range)?;

    tracing::trace!(exp, %sep, index, left, right, "Split with fixed padding");

    Ok(TokenPair { left, right })
}

/// Split `exp` around the first `sep`, trimming whitespace from both halves.
pub fn split_trimmed(
    exp: &str,
    sep: char,
) -> Result<TokenPair<'_>, SplitError> {
    let index = exp
        .find(sep)
        .ok_or(SplitError::MissingSeparator { separator: sep })?;

    let left = exp[..index].trim();
    let right = exp[index + sep.len_utf8()..].trim();

    tracing::trace!(exp, %sep, index, left, right, "Split and trimmed");

    Ok(TokenPair { left, right })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The separator never appears.
    MissingSeparator { separator: char },
    /// The separator is too close to either end of the text (or next to a
    /// multi-byte character) to cut at the fixed offsets.
    OutOfRange { separator: char, index: usize },
}

impl SplitError {
    pub fn kind(&self) -> ErrorKind { ErrorKind::OutOfRange }
}

impl Display for SplitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::MissingSeparator { separator } => {
                write!(f, "Couldn't find the '{}' separator", separator)
            },
            SplitError::OutOfRange { separator, index } => write!(
                f,
                "The '{}' at index {} doesn't have padding on both sides",
                separator, index
            ),
        }
    }
}

impl Error for SplitError {}

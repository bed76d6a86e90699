//! Decompose simple arithmetic equations like `"12 + 5 = 17"` into their
//! operands.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod equations;
mod solve;
mod split;

pub use equations::{Equation, ErrorKind, Operator, ParseError};
pub use solve::{solution, Decomposer, FailurePolicy, SolutionError};
pub use split::{split_exp, split_trimmed, Padding, SplitError, TokenPair};

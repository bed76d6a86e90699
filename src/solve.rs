use crate::{
    equations::{self, Equation, ErrorKind, ParseError},
    split::Padding,
};
use smol_str::SmolStr;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// What to do when one expression in a batch can't be decomposed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first bad expression and return its error.
    Abort,
    /// Log the failure and carry on with the next expression.
    Continue,
}

impl Default for FailurePolicy {
    fn default() -> Self { FailurePolicy::Abort }
}

/// A builder for configuring how expressions get decomposed.
///
/// ```rust
/// use equation_split::{Decomposer, FailurePolicy, Operator, Padding};
///
/// let decomposer = Decomposer::new()
///     .with_padding(Padding::Fixed)
///     .with_failure_policy(FailurePolicy::Continue);
///
/// let equation = decomposer.decompose("12 - 5 = 7").unwrap();
/// assert_eq!(equation.op, Operator::Minus);
/// assert!(equation.holds());
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Decomposer {
    padding: Padding,
    failure_policy: FailurePolicy,
}

impl Decomposer {
    pub fn new() -> Self { Decomposer::default() }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_failure_policy(
        mut self,
        failure_policy: FailurePolicy,
    ) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn padding(&self) -> Padding { self.padding }

    pub fn failure_policy(&self) -> FailurePolicy { self.failure_policy }

    /// Extract the operands and result from a single expression.
    pub fn decompose(&self, src: &str) -> Result<Equation, ParseError> {
        let padding = self.padding;
        let equation =
            equations::decompose(src, |s, sep| padding.split(s, sep))?;

        tracing::debug!(
            src,
            first = equation.first,
            op = %equation.op,
            second = equation.second,
            result = equation.result,
            "Decomposed an equation"
        );

        Ok(equation)
    }

    /// Decompose each expression independently, keeping every outcome.
    pub fn decompose_each<E, S>(
        &self,
        expressions: E,
    ) -> Vec<Result<Equation, SolutionError>>
    where
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        expressions
            .into_iter()
            .enumerate()
            .map(|(index, expression)| {
                let expression = expression.as_ref();
                self.decompose(expression)
                    .map_err(|e| SolutionError::new(index, expression, e))
            })
            .collect()
    }

    /// Decompose a batch of expressions, honouring the [`FailurePolicy`].
    pub fn decompose_all<E, S>(
        &self,
        expressions: E,
    ) -> Result<Vec<Equation>, SolutionError>
    where
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut equations = Vec::new();

        for outcome in self.decompose_each(expressions) {
            match outcome {
                Ok(equation) => equations.push(equation),
                Err(e) => match self.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Continue => {
                        tracing::warn!(
                            index = e.index,
                            expression = %e.expression,
                            error = %e.source,
                            "Skipping an expression"
                        );
                    },
                },
            }
        }

        Ok(equations)
    }

    /// Parse every expression, returning the (currently always empty) list of
    /// answers.
    ///
    /// Every expression still gets decomposed, so malformed input is reported
    /// according to the [`FailurePolicy`]. Use [`Decomposer::decompose_all()`]
    /// to get at the parsed operands.
    pub fn solution<E, S>(
        &self,
        expressions: E,
    ) -> Result<Vec<String>, SolutionError>
    where
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let answers: Vec<String> = Vec::new();
        let equations = self.decompose_all(expressions)?;

        tracing::debug!(
            equations = equations.len(),
            answers = answers.len(),
            "Processed a batch of expressions"
        );

        Ok(answers)
    }
}

/// Decompose a batch of expressions with the default [`Decomposer`].
///
/// ```rust
/// let got = equation_split::solution(&["1 + 2 = 3", "9 - 4 = 5"]).unwrap();
/// assert!(got.is_empty());
///
/// assert!(equation_split::solution(&["1 + 2"]).is_err());
/// ```
pub fn solution<E, S>(expressions: E) -> Result<Vec<String>, SolutionError>
where
    E: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Decomposer::default().solution(expressions)
}

/// An expression in a batch which couldn't be decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionError {
    /// Where the expression appeared in the batch.
    pub index: usize,
    pub expression: SmolStr,
    pub source: ParseError,
}

impl SolutionError {
    fn new(index: usize, expression: &str, source: ParseError) -> Self {
        SolutionError {
            index,
            expression: expression.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind { self.source.kind() }
}

impl Display for SolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to decompose expression {} (\"{}\")",
            self.index, self.expression
        )
    }
}

impl Error for SolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> { Some(&self.source) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{equations::Operator, split::SplitError};

    #[test]
    fn solution_is_empty_for_valid_input() {
        let got = solution(&["1 + 2 = 3"]).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn solution_is_empty_even_when_the_equation_is_wrong() {
        let got = solution(vec![String::from("1 + 2 = 4")]).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn solution_of_nothing() {
        let got = solution(Vec::<String>::new()).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn solution_propagates_invalid_integers() {
        let got = solution(&["1 + 2 = 3", "abc + 2 = 3"]).unwrap_err();

        assert_eq!(got.index, 1);
        assert_eq!(got.expression, "abc + 2 = 3");
        assert_eq!(got.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn solution_propagates_a_missing_equals_sign() {
        let got = solution(&["1 + 2"]).unwrap_err();

        assert_eq!(got.index, 0);
        assert_eq!(
            got.source,
            ParseError::Split(SplitError::MissingSeparator { separator: '=' })
        );
        assert_eq!(got.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn continue_policy_skips_bad_expressions() {
        let decomposer =
            Decomposer::new().with_failure_policy(FailurePolicy::Continue);

        let got = decomposer
            .decompose_all(&["1 + 2 = 3", "oops", "4 - 1 = 3"])
            .unwrap();

        assert_eq!(
            got,
            vec![
                Equation::new(1, Operator::Plus, 2, 3),
                Equation::new(4, Operator::Minus, 1, 3),
            ]
        );
        assert!(decomposer.solution(&["oops"]).unwrap().is_empty());
    }

    #[test]
    fn abort_policy_stops_at_the_first_failure() {
        let got = Decomposer::new()
            .decompose_all(&["1 + 2 = 3", "x + 1 = 2", "1 + 2"])
            .unwrap_err();

        assert_eq!(got.index, 1);
        assert_eq!(got.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn decompose_each_collects_every_outcome() {
        let got = Decomposer::new().decompose_each(&["1 + 2 = 3", "1 + 2"]);

        assert_eq!(got.len(), 2);
        assert_eq!(got[0], Ok(Equation::new(1, Operator::Plus, 2, 3)));
        assert_eq!(got[1].as_ref().unwrap_err().index, 1);
    }

    #[test]
    fn fixed_padding_is_configurable() {
        let decomposer = Decomposer::new().with_padding(Padding::Fixed);
        assert_eq!(decomposer.padding(), Padding::Fixed);
        assert_eq!(decomposer.failure_policy(), FailurePolicy::Abort);

        let got = decomposer.decompose("12 + 5 = 17").unwrap();
        assert_eq!(got, Equation::new(12, Operator::Plus, 5, 17));

        // the default decomposer copes without padding, the fixed one doesn't
        assert!(Decomposer::new().decompose("12+5=17").is_ok());
        let err = decomposer.decompose("12+5=17").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn errors_point_at_the_bad_expression() {
        let got = solution(&["1 + 2 = 3", "1 + two = 3"]).unwrap_err();

        assert_eq!(
            got.to_string(),
            "Unable to decompose expression 1 (\"1 + two = 3\")"
        );
        assert!(Error::source(&got).is_some());
    }
}

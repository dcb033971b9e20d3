//! The kinds of errors reported while evaluating input.

use ariadne::Fmt;
use canon_attrs::ErrorKind;
use canon_core::Error as CoreError;
use canon_error::{Error, ErrorKind, EXPR};
use std::ops::Range;

/// The function is not one of the built-in functions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function: `{}`", self.name),
    labels = ["this function", ""],
    help = if self.suggestions.is_empty() {
        "the available functions are `sin`, `cos`, `tan`, `ln`, `abs`, `sqrt`, `exp` and `root`".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// Built-in functions with a similar name, closest first.
    pub suggestions: Vec<String>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments given to the `{}` function", self.name),
    labels = ["this function call", ""],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.expected,
        self.given
    )
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// The divisor of a division is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "attempted to divide by zero",
    labels = ["this evaluates to zero"],
)]
pub struct DivideByZero;

/// Folding integers overflowed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "integer overflow",
    labels = ["the result of this expression does not fit a 64-bit integer"],
)]
pub struct Overflow;

/// An argument was rejected, such as a malformed decimal literal.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument: {}", self.reason),
    labels = ["here"],
)]
pub struct InvalidArgument {
    pub reason: &'static str,
}

/// A comparison or logical operation was used where an expression is required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an expression, found a comparison",
    labels = ["this is a comparison"],
    help = format!("comparisons can only be combined with {} and {}", "&&".fg(EXPR), "||".fg(EXPR)),
)]
pub struct ExpectedExpression;

/// An expression was used as an operand of `&&` or `||`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a comparison, found an expression",
    labels = ["this is not a comparison"],
    help = format!("compare it with something first, as in `{}`", "x > 0".fg(EXPR)),
)]
pub struct ExpectedComparison;

/// A constant was used as the target of an assignment.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot assign to the constant `{}`", self.name),
    labels = ["this name is a constant"],
    help = "choose a different variable name",
)]
pub struct AssignToConstant {
    pub name: String,
}

/// Converts an error from the expression core into a report pointing at `span`.
pub fn from_core(err: CoreError, span: Range<usize>) -> Error {
    match err {
        CoreError::DivideByZero => Error::new(vec![span], DivideByZero),
        CoreError::Overflow => Error::new(vec![span], Overflow),
        CoreError::InvalidArgument(reason) => Error::new(vec![span], InvalidArgument { reason }),
        CoreError::InvalidAccessor { .. } => {
            Error::new(vec![span], InvalidArgument { reason: "malformed expression" })
        },
    }
}

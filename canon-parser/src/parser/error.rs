//! The kinds of errors the parser reports.

use ariadne::Fmt;
use canon_attrs::ErrorKind;
use canon_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The input ended in the middle of a formula.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("an {} should follow here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of a statement was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("this {} does not continue the formula before it", "text".fg(EXPR))],
    help = "separate statements with a newline or `;`",
)]
pub struct ExpectedEof;

/// A token did not fit the grammar at its position.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "found {:?}, wanted {}",
        self.found,
        self.expected.iter().map(|kind| format!("{:?}", kind)).collect::<Vec<_>>().join(" or "),
    )],
)]
pub struct UnexpectedToken {
    /// Token kinds that would have been accepted.
    pub expected: &'static [TokenKind],

    pub found: TokenKind,
}

/// A parenthesis has no partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced parenthesis",
    labels = ["no matching parenthesis for this one"],
    help = if self.opening {
        "a `)` is missing later in the formula"
    } else {
        "a `(` is missing earlier in the formula"
    },
)]
pub struct UnclosedParenthesis {
    /// True for a `(` that is never closed, false for a stray `)`.
    pub opening: bool,
}

/// An integer literal does not fit a 64-bit signed integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number literal",
    labels = ["this number is too large"],
    help = format!("integers must be between {} and {}", i64::MIN, i64::MAX),
)]
pub struct InvalidNumber;

/// Two comparisons were chained, as in `a < b < c`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "comparisons cannot be chained",
    labels = ["(1) this comparison...", "(2) ...is compared again here"],
    help = format!("combine separate comparisons with {}, as in `a < b && b < c`", "&&".fg(EXPR)),
)]
pub struct ChainedComparison;

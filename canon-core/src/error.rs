//! The error type shared by every fallible operation in this crate.

use crate::expr::ExprKind;
use std::fmt;

/// An error raised while constructing or inspecting an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected at construction time, such as an empty variable name or a
    /// malformed decimal literal.
    InvalidArgument(&'static str),

    /// The divisor of a division was the literal zero.
    DivideByZero,

    /// Constant folding overflowed the 64-bit integer range.
    Overflow,

    /// A kind-specific accessor was called on an expression of a different kind.
    InvalidAccessor {
        /// The kind the accessor works on.
        expected: ExprKind,

        /// The kind of the expression it was called on.
        found: ExprKind,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Self::DivideByZero => write!(f, "attempted to divide by zero"),
            Self::Overflow => write!(f, "integer overflow during constant folding"),
            Self::InvalidAccessor { expected, found } => {
                write!(f, "expected {} expression, found {} expression", expected, found)
            },
        }
    }
}

impl std::error::Error for Error {}

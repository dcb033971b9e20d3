use canon_error::Error;
use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        token::op::UnaryOp,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A prefix unary expression, such as `-x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or a primary expression if there is no prefix operator.
    ///
    /// The operand extends over every following operator that binds tighter than the prefix
    /// operator, so `-x^2` is `-(x^2)` and `-x*y` is `(-x)*y`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let mut ahead = input.clone();
        if ahead.next_token()?.kind != TokenKind::Sub {
            return Expr::parse_primary(input);
        }

        let op = input.try_parse::<UnaryOp>()?;
        let operand = {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op.precedence())?
        };
        let span = op.span.start..operand.span().end;
        Ok(Expr::Unary(Self {
            operand: Box::new(operand),
            op,
            span,
        }))
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}

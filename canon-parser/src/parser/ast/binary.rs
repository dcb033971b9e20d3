use canon_error::Error;
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::ChainedComparison,
    token::op::BinOp,
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand side, the operator, and the right-hand side of a potential
    /// binary expression, parse ahead to see if the right-hand side is incomplete.
    ///
    /// In `1 + 2 * 3`, the first right-hand side is `2`. The operator after it, `*`, binds
    /// tighter than `+`, so the expression starting at `2` is parsed first and `2 * 3` becomes
    /// the right-hand side of `1 +`. In `3 * 2 + 1`, the operator after `2` binds looser, so the
    /// node `3 * 2` is built and [`Self::parse_expr`] picks up `+ 1` afterwards.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            match input_ahead.try_parse::<BinOp>() {
                Ok(next_op) if next_op.precedence() > precedence
                    || (next_op.precedence() == precedence
                        && next_op.associativity() == Associativity::Right) => {
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                },
                _ => break,
            }
        }

        // comparisons do not associate: `a < b < c` is rejected
        if op.kind.is_comparison() {
            if let Expr::Binary(inner) = &lhs {
                if inner.op.kind.is_comparison() {
                    return Err(Error::new(vec![inner.span(), op.span], ChainedComparison));
                }
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// After parsing the left-hand side of a potential binary expression, parse ahead to see if
    /// there is a binary operator of at least the given precedence and a right-hand side.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            let op = match input_ahead.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= precedence => op,
                _ => break,
            };

            input.set_cursor(&input_ahead);
            let rhs = Unary::parse_or_lower(input)?;
            lhs = Self::complete_rhs(input, lhs, op, rhs)?;
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

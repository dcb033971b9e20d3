use canon_error::Error;
use crate::parser::{
    ast::{expr::Expr, literal::LitSym},
    token::Assign as AssignToken,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An assignment of a value to a name, such as `r = 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assign {
    /// The name being assigned to.
    pub target: LitSym,

    /// The assigned expression.
    pub value: Expr,

    /// The region of the source code that this assignment was parsed from.
    pub span: Range<usize>,
}

impl Parse for Assign {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let target = input.try_parse_with_fn(|input| {
            let target = input.try_parse::<LitSym>()?;
            input.try_parse::<AssignToken>()?;
            Ok(target)
        })?;
        let value = input.try_parse::<Expr>()?;
        let span = target.span.start..value.span().end;
        Ok(Self { target, value, span })
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

/// A single statement: an assignment or an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stmt {
    Assign(Assign),
    Expr(Expr),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn span(&self) -> Range<usize> {
        match self {
            Stmt::Assign(assign) => assign.span.clone(),
            Stmt::Expr(expr) => expr.span(),
        }
    }
}

impl Parse for Stmt {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // only a name followed by `=` starts an assignment
        let mut ahead = input.clone();
        let is_assignment = ahead
            .try_parse_with_fn(|ahead| {
                ahead.try_parse::<LitSym>()?;
                ahead.try_parse::<AssignToken>()
            })
            .is_ok();

        if is_assignment {
            input.try_parse::<Assign>().map(Stmt::Assign)
        } else {
            input.try_parse::<Expr>().map(Stmt::Expr)
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign(assign) => assign.fmt(f),
            Stmt::Expr(expr) => expr.fmt(f),
        }
    }
}

use canon_error::Error;
use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            literal::{LitDecimal, LitInt, LitSym, Literal},
            paren::Paren,
            unary::Unary,
        },
        error::{UnclosedParenthesis, UnexpectedToken},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any kind of expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sqrt(2)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2` or `x < y`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is a [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            _ => self,
        }
    }

    /// Returns true if the expression is a comparison, such as `x < 1`.
    pub fn is_comparison(&self) -> bool {
        matches!(self, Expr::Binary(binary) if binary.op.kind.is_comparison())
    }

    /// Parses a primary expression: a literal, a call, or a parenthesized expression.
    pub fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
        let mut ahead = input.clone();
        let token = ahead.next_token()?;
        match token.kind {
            TokenKind::Int => input.try_parse::<LitInt>().map(|int| Expr::Literal(Literal::Integer(int))),
            TokenKind::Decimal => input.try_parse::<LitDecimal>().map(|decimal| Expr::Literal(Literal::Decimal(decimal))),
            TokenKind::Name => {
                // a name directly followed by `(` is a call
                let is_call = ahead.current_token()
                    .map_or(false, |next| next.kind == TokenKind::OpenParen);
                if is_call {
                    input.try_parse::<Call>().map(Expr::Call)
                } else {
                    input.try_parse::<LitSym>().map(|sym| Expr::Literal(Literal::Symbol(sym)))
                }
            },
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Expr::Paren),
            TokenKind::CloseParen => {
                Err(Error::new(vec![token.span], UnclosedParenthesis { opening: false }))
            },
            _ => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[
                    TokenKind::Int,
                    TokenKind::Decimal,
                    TokenKind::Name,
                    TokenKind::OpenParen,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

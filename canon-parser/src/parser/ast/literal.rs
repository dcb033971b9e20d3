use canon_error::Error;
use crate::{
    parser::{error::{InvalidNumber, UnexpectedToken}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal that fits an `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitInt {
    /// The value of the integer literal.
    pub value: i64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitInt {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Int {
            return Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Int],
                found: token.kind,
            }));
        }

        let value = token.lexeme
            .parse::<i64>()
            .map_err(|_| Error::new(vec![token.span.clone()], InvalidNumber))?;
        Ok(Self { value, span: token.span })
    }
}

/// A decimal literal, such as `2.5` or `1e-3`.
///
/// The lexeme is kept as written, so consumers can convert it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitDecimal {
    /// The literal as written in the source.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitDecimal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Decimal {
            return Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Decimal],
                found: token.kind,
            }));
        }

        Ok(Self { value: token.lexeme.to_owned(), span: token.span })
    }
}

/// A symbol, such as `x` or `π`. Symbols name variables, constants and functions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Name {
            return Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Name],
                found: token.kind,
            }));
        }

        Ok(Self { name: token.lexeme.to_owned(), span: token.span })
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    Integer(LitInt),
    Decimal(LitDecimal),
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(int) => int.span.clone(),
            Literal::Decimal(decimal) => decimal.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut ahead = input.clone();
        let token = ahead.next_token()?;
        match token.kind {
            TokenKind::Int => input.try_parse().map(Literal::Integer),
            TokenKind::Decimal => input.try_parse().map(Literal::Decimal),
            TokenKind::Name => input.try_parse().map(Literal::Symbol),
            _ => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Decimal, TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(int) => write!(f, "{}", int.value),
            Literal::Decimal(decimal) => f.write_str(&decimal.value),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}

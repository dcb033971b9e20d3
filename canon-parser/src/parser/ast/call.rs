use canon_error::Error;
use crate::parser::{
    ast::{expr::Expr, literal::LitSym},
    error::UnclosedParenthesis,
    token::{CloseParen, Comma, OpenParen},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `root(x, 3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns two spans: the function name with the opening parenthesis, and the closing
    /// parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end - 1..self.paren_span.end,
        ]
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open_paren = input.try_parse::<OpenParen>()?;
        let unclosed = |_| Error::new(
            vec![open_paren.span.clone()],
            UnclosedParenthesis { opening: true },
        );

        let mut args = Vec::new();
        let close_paren = match input.try_parse::<CloseParen>() {
            Ok(close_paren) => close_paren,
            Err(_) => {
                loop {
                    args.push(input.try_parse::<Expr>()?);
                    if input.try_parse::<Comma>().is_err() {
                        break;
                    }
                }
                input.try_parse::<CloseParen>().map_err(unclosed)?
            },
        };

        Ok(Self {
            span: name.span.start..close_paren.span.end,
            paren_span: open_paren.span.start..close_paren.span.end,
            name,
            args,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

pub mod ast;
pub mod error;
pub mod token;

use ast::stmt::Stmt;
use canon_error::{Error, ErrorKind};
use crate::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// A parser for formula text. This is the type to use to parse a piece of source code into a
/// syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Moves this parser's cursor to the position of another parser over the same tokens.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past insignificant whitespace.
    pub fn advance_past_whitespace(&mut self) {
        while self.current_token().map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.advance_past_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(error::UnexpectedEof)),
        }
    }

    /// Returns true if there are no tokens left other than insignificant whitespace.
    pub fn at_end(&self) -> bool {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .all(Token::is_whitespace)
    }

    /// Speculatively parses a value from the given stream of tokens.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value using a custom parsing function, backtracking the cursor if
    /// the function fails.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.at_end() {
            Ok(value)
        } else {
            self.advance_past_whitespace();
            Err(self.error(error::ExpectedEof))
        }
    }

    /// Parses every statement in the source. Statements are separated by newlines or `;`, and
    /// empty statements are skipped.
    pub fn try_parse_full_many(&mut self) -> Result<Vec<Stmt>, Error> {
        let mut stmts = Vec::new();

        loop {
            self.skip_separators();
            if self.at_end() {
                return Ok(stmts);
            }

            stmts.push(Stmt::parse(self)?);

            self.advance_past_whitespace();
            match self.current_token() {
                None => return Ok(stmts),
                Some(token) if token.kind.is_separator() => continue,
                Some(_) => return Err(self.error(error::ExpectedEof)),
            }
        }
    }

    /// Skips any run of statement separators and whitespace.
    fn skip_separators(&mut self) {
        while self.current_token().map_or(false, |token| {
            token.is_whitespace() || token.kind.is_separator()
        }) {
            self.cursor += 1;
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of logical or (`||`).
    Or,

    /// Precedence of logical and (`&&`).
    And,

    /// Precedence of comparisons (`>`, `>=`, `<`, `<=`, `==` and `!=`).
    Compare,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{LitDecimal, LitInt, LitSym, Literal},
        paren::Paren,
        stmt::Assign,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn int(value: i64, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Integer(LitInt { value, span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn binary(lhs: Expr, kind: BinOpKind, op_span: Range<usize>, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp { kind, span: op_span },
            rhs: Box::new(rhs),
            span,
        })
    }

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16"), int(16, 0..2));
    }

    #[test]
    fn literal_decimal() {
        assert_eq!(parse("3.25e2"), Expr::Literal(Literal::Decimal(LitDecimal {
            value: "3.25e2".to_string(),
            span: 0..6,
        })));
    }

    #[test]
    fn precedence() {
        // 1 + 2 * 3
        assert_eq!(parse("1 + 2 * 3"), binary(
            int(1, 0..1),
            BinOpKind::Add,
            4..5,
            binary(int(2, 4..5), BinOpKind::Mul, 6..7, int(3, 8..9)),
        ));
    }

    #[test]
    fn left_associative() {
        // (a - b) - c
        assert_eq!(parse("a-b-c"), binary(
            binary(sym("a", 0..1), BinOpKind::Sub, 1..2, sym("b", 2..3)),
            BinOpKind::Sub,
            3..4,
            sym("c", 4..5),
        ));
    }

    #[test]
    fn right_associative_exponent() {
        // a ^ (b ^ c)
        assert_eq!(parse("a^b^c"), binary(
            sym("a", 0..1),
            BinOpKind::Exp,
            1..2,
            binary(sym("b", 2..3), BinOpKind::Exp, 3..4, sym("c", 4..5)),
        ));
    }

    #[test]
    fn negation_binds_looser_than_exponent() {
        // -(x^2)
        assert_eq!(parse("-x^2"), Expr::Unary(Unary {
            operand: Box::new(binary(sym("x", 1..2), BinOpKind::Exp, 2..3, int(2, 3..4))),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));

        // (-x) * y
        let product = parse("-x*y");
        assert_eq!(product.to_string(), "-x * y");
        assert!(matches!(product, Expr::Binary(Binary { op: BinOp { kind: BinOpKind::Mul, .. }, .. })));
    }

    #[test]
    fn comparison_and_logic() {
        let expr = parse("x < 1 || y >= 2 && x != y");
        assert_eq!(expr.to_string(), "x < 1 || y >= 2 && x != y");
        let Expr::Binary(or) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(or.op.kind, BinOpKind::Or);
        assert!(matches!(*or.rhs, Expr::Binary(Binary { op: BinOp { kind: BinOpKind::And, .. }, .. })));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("(1 + x) * 2"), binary(
            Expr::Paren(Paren {
                expr: Box::new(binary(int(1, 1..2), BinOpKind::Add, 3..4, sym("x", 5..6))),
                span: 0..7,
            }),
            BinOpKind::Mul,
            8..9,
            int(2, 10..11),
        ));
    }

    #[test]
    fn function_calls() {
        assert_eq!(parse("root(x, 3)"), Expr::Call(Call {
            name: LitSym { name: "root".to_string(), span: 0..4 },
            args: vec![sym("x", 5..6), int(3, 8..9)],
            span: 0..10,
            paren_span: 4..10,
        }));
        assert_eq!(parse("sin(π/2)").to_string(), "sin(π / 2)");
        assert_eq!(parse("f()").to_string(), "f()");
    }

    #[test]
    fn statements() {
        let stmts = Parser::new("x = 2\n\ny = x^2; x + y;").try_parse_full_many().unwrap();
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[0], Stmt::Assign(Assign {
            target: LitSym { name: "x".to_string(), span: 0..1 },
            value: int(2, 4..5),
            span: 0..5,
        }));
        assert_eq!(stmts[1].to_string(), "y = x ^ 2");
        assert_eq!(stmts[2], Stmt::Expr(binary(sym("x", 16..17), BinOpKind::Add, 18..19, sym("y", 20..21))));
    }

    #[test]
    fn equality_is_not_assignment() {
        let stmts = Parser::new("x == 2").try_parse_full_many().unwrap();
        assert!(matches!(stmts[0], Stmt::Expr(_)));
    }

    #[test]
    fn errors() {
        let err = Parser::new("1 +").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![3..3]);

        let err = Parser::new("(1 + 2").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![0..1]);

        let err = Parser::new("1 2").try_parse_full_many().unwrap_err();
        assert_eq!(err.spans, vec![2..3]);

        let err = Parser::new("99999999999999999999").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![0..20]);

        let err = Parser::new("a < b < c").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![0..5, 6..7]);

        let err = Parser::new("x + )").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
    }
}

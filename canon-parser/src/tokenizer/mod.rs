pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, so the parser
/// can backtrack.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    // every character lexes as some token, at worst a `Symbol`
    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn names_and_decimals() {
        compare_tokens(
            "x_1*2.5e-3/π",
            [
                (TokenKind::Name, "x_1"),
                (TokenKind::Mul, "*"),
                (TokenKind::Decimal, "2.5e-3"),
                (TokenKind::Div, "/"),
                (TokenKind::Name, "π"),
            ],
        );
        compare_tokens(
            ".5 3. 2e",
            [
                (TokenKind::Decimal, ".5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Decimal, "3."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
                (TokenKind::Name, "e"),
            ],
        );
    }

    #[test]
    fn comparisons_and_logic() {
        compare_tokens(
            "a<=b&&c!=d||e==f",
            [
                (TokenKind::Name, "a"),
                (TokenKind::LessEq, "<="),
                (TokenKind::Name, "b"),
                (TokenKind::And, "&&"),
                (TokenKind::Name, "c"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Name, "d"),
                (TokenKind::Or, "||"),
                (TokenKind::Name, "e"),
                (TokenKind::Eq, "=="),
                (TokenKind::Name, "f"),
            ],
        );
    }

    #[test]
    fn separators_and_symbols() {
        compare_tokens(
            "x = 1;\n$",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Assign, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "1"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::NewLine, "\n"),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn complete_tokens_carry_spans() {
        let tokens = tokenize_complete("sin(π)");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..3, 3..4, 4..6, 6..7]);
        assert_eq!(tokens[2].lexeme, "π");
    }
}

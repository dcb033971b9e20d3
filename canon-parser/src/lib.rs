//! Tokenizer and parser for formula text.
//!
//! [`tokenizer`] splits source text into [`Token`](tokenizer::Token)s with [`logos`], and
//! [`parser`] turns them into a span-annotated syntax tree of statements:
//!
//! ```
//! use canon_parser::parser::{ast::Stmt, Parser};
//!
//! let stmts = Parser::new("r = 2; pi * r^2").try_parse_full_many().unwrap();
//! assert_eq!(stmts.len(), 2);
//! assert!(matches!(stmts[0], Stmt::Assign(_)));
//! ```

pub mod parser;
pub mod tokenizer;

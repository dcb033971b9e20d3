//! The syntax tree. Every node records the region of the source it was parsed from.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod stmt;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::Expr;
pub use literal::{LitDecimal, LitInt, LitSym, Literal};
pub use paren::Paren;
pub use stmt::{Assign, Stmt};
pub use unary::Unary;

//! Symbolic expressions that are always in canonical form.
//!
//! Every [`Expr`] is built through smart constructors that run a rewrite engine before the node
//! is allocated, so like terms are already combined, integer arithmetic is already folded and the
//! operands of commutative operations are already sorted:
//!
//! ```
//! use canon_core::Expr;
//!
//! let x = Expr::variable("x").unwrap();
//! let y = Expr::variable("y").unwrap();
//! let sum = &x + &y + &x + &y;
//! assert_eq!(sum.to_string(), "2 * x + 2 * y");
//! ```
//!
//! Comparing expressions with [`Expr::less_than`] and friends builds an [`Equation`] instead of
//! a boolean, and equations combine into [`EquationSystem`]s.

pub mod arith;
pub mod compare;
pub mod consts;
pub mod equation;
pub mod error;
pub mod expr;
pub mod func;
pub mod simplify;
pub mod visit;

pub use equation::{ComparisonOperator, Equation, EquationSystem};
pub use error::Error;
pub use expr::{BinaryOp, Constant, Expr, ExprKind, Node, UnaryOp, VariadicOp};
pub use visit::{Substitution, Transformer};

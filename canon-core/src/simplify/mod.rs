//! The rewrite engine.
//!
//! Each operator has one entry point that inspects the shapes of its (already canonical)
//! operands and returns:
//!
//! - `Ok(Some(expr))` with an equivalent, simplified expression if a rule applies,
//! - `Ok(None)` if no rule applies, in which case the caller allocates the raw node,
//! - `Err(_)` for division by the literal zero or overflow while folding integers.
//!
//! Rules build their results through the smart constructors in [`crate::expr::build`], so the
//! engine is mutually recursive: a rule for division may build a product, which may in turn build
//! a sum. Every rule makes its operands strictly simpler or moves them toward canonical order,
//! which is what guarantees termination.
//!
//! The engine only performs local rewrites. It never proves that a symbolic operand is non-zero,
//! so `0^0` is left as-is, while rules such as `x^a * x^b = x^(a+b)` assume the usual algebraic
//! identities for symbolic bases.

pub mod fraction;
mod reduce;
mod rules;

use crate::{error::Error, expr::{BinaryOp, Expr, UnaryOp, VariadicOp}};

/// The result of trying to simplify an operation.
pub type Simplified = Result<Option<Expr>, Error>;

/// Tries to simplify a unary operation.
pub fn unary(op: UnaryOp, operand: &Expr) -> Simplified {
    match op {
        UnaryOp::Neg => rules::negate::negate(operand),
        UnaryOp::Abs => rules::abs::abs(operand),
        UnaryOp::Sin => rules::trigonometry::sin(operand),
        UnaryOp::Cos => rules::trigonometry::cos(operand),
        UnaryOp::Tan | UnaryOp::Ln => Ok(None),
    }
}

/// Tries to simplify a binary operation.
pub fn binary(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Simplified {
    match op {
        BinaryOp::Add => rules::add::add(lhs, rhs),
        BinaryOp::Sub => rules::subtract::subtract(lhs, rhs),
        BinaryOp::Mul => rules::multiply::multiply(lhs, rhs),
        BinaryOp::Div => rules::divide::divide(lhs, rhs),
        BinaryOp::Pow => rules::power::power(lhs, rhs),
        BinaryOp::Root => rules::root::root(lhs, rhs),
    }
}

/// Tries to simplify an addition or multiplication of three or more operands.
pub fn variadic(op: VariadicOp, operands: &[Expr]) -> Simplified {
    match op {
        VariadicOp::Add => reduce::reduce(op, operands, rules::add::add),
        VariadicOp::Mul => reduce::reduce(op, operands, rules::multiply::multiply),
    }
}

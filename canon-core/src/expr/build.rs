//! Smart constructors.
//!
//! Every operation node is created here. Each constructor first asks the rewrite engine for a
//! simplified replacement and only allocates the raw node if no rule applies, which is what keeps
//! every [`Expr`] in canonical form.

use crate::{error::Error, simplify};
use super::{BinaryOp, Expr, UnaryOp, VariadicOp};
use tracing::trace;

/// Builds a unary operation, simplifying it if possible.
pub fn unary(op: UnaryOp, operand: &Expr) -> Result<Expr, Error> {
    match simplify::unary(op, operand)? {
        Some(expr) => {
            trace!(op = op.name(), %operand, result = %expr, "rewrote unary operation");
            Ok(expr)
        },
        None => Ok(Expr::unary_raw(op, operand.clone())),
    }
}

/// Builds a binary operation, simplifying it if possible.
pub fn binary(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<Expr, Error> {
    match simplify::binary(op, lhs, rhs)? {
        Some(expr) => {
            trace!(op = op.symbol(), %lhs, %rhs, result = %expr, "rewrote binary operation");
            Ok(expr)
        },
        None => Ok(Expr::binary_raw(op, lhs.clone(), rhs.clone())),
    }
}

/// Builds an addition or multiplication of any number of operands, simplifying it if possible.
///
/// An empty sum is zero and an empty product is one.
pub fn variadic(op: VariadicOp, mut operands: Vec<Expr>) -> Result<Expr, Error> {
    match operands.len() {
        0 => Ok(match op {
            VariadicOp::Add => Expr::zero(),
            VariadicOp::Mul => Expr::one(),
        }),
        1 => Ok(operands.swap_remove(0)),
        2 => binary(op.binary(), &operands[0], &operands[1]),
        _ => match simplify::variadic(op, &operands)? {
            Some(expr) => {
                trace!(?op, operands = operands.len(), result = %expr, "rewrote variadic operation");
                Ok(expr)
            },
            None => Ok(Expr::variadic_raw(op, operands)),
        },
    }
}

impl Expr {
    /// Negates this expression.
    pub fn try_neg(&self) -> Result<Expr, Error> {
        unary(UnaryOp::Neg, self)
    }

    /// Takes the absolute value of this expression.
    pub fn try_abs(&self) -> Result<Expr, Error> {
        unary(UnaryOp::Abs, self)
    }

    pub fn try_add(&self, rhs: &Expr) -> Result<Expr, Error> {
        binary(BinaryOp::Add, self, rhs)
    }

    pub fn try_sub(&self, rhs: &Expr) -> Result<Expr, Error> {
        binary(BinaryOp::Sub, self, rhs)
    }

    pub fn try_mul(&self, rhs: &Expr) -> Result<Expr, Error> {
        binary(BinaryOp::Mul, self, rhs)
    }

    /// Divides this expression by `rhs`.
    ///
    /// Returns [`Error::DivideByZero`] if `rhs` is the literal zero.
    pub fn try_div(&self, rhs: &Expr) -> Result<Expr, Error> {
        binary(BinaryOp::Div, self, rhs)
    }

    /// Raises this expression to the power of `exponent`.
    pub fn try_pow(&self, exponent: &Expr) -> Result<Expr, Error> {
        binary(BinaryOp::Pow, self, exponent)
    }

    /// Takes the `index`-th root of this expression.
    pub fn try_root(&self, index: &Expr) -> Result<Expr, Error> {
        binary(BinaryOp::Root, self, index)
    }

    /// Adds all the given terms together.
    pub fn sum(terms: Vec<Expr>) -> Result<Expr, Error> {
        variadic(VariadicOp::Add, terms)
    }

    /// Multiplies all the given factors together.
    pub fn product(factors: Vec<Expr>) -> Result<Expr, Error> {
        variadic(VariadicOp::Mul, factors)
    }
}

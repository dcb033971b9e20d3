//! Named functions over expressions.
//!
//! These are the function-call forms of the construction API. Each one runs the rewrite rules for
//! its operator, so `sin(pi())` is already `0`.

use crate::{
    error::Error,
    expr::{build, Expr, UnaryOp},
};

/// `√x`, the square root of `x`.
pub fn sqrt(x: &Expr) -> Result<Expr, Error> {
    x.try_root(&Expr::number(2))
}

/// `root(x, n)`, the `n`-th root of `x`.
pub fn root(x: &Expr, index: &Expr) -> Result<Expr, Error> {
    x.try_root(index)
}

/// `base^exponent`.
pub fn pow(base: &Expr, exponent: &Expr) -> Result<Expr, Error> {
    base.try_pow(exponent)
}

/// `e^x`.
pub fn exp(x: &Expr) -> Result<Expr, Error> {
    Expr::e().try_pow(x)
}

pub fn abs(x: &Expr) -> Result<Expr, Error> {
    x.try_abs()
}

pub fn sin(x: &Expr) -> Result<Expr, Error> {
    build::unary(UnaryOp::Sin, x)
}

pub fn cos(x: &Expr) -> Result<Expr, Error> {
    build::unary(UnaryOp::Cos, x)
}

pub fn tan(x: &Expr) -> Result<Expr, Error> {
    build::unary(UnaryOp::Tan, x)
}

/// The natural logarithm.
pub fn ln(x: &Expr) -> Result<Expr, Error> {
    build::unary(UnaryOp::Ln, x)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::fraction::ratio;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn roots() {
        assert_eq!(sqrt(&Expr::number(49)), Ok(Expr::number(7)));
        assert_eq!(root(&Expr::number(-27), &Expr::number(3)), Ok(Expr::number(-3)));
        assert_eq!(sqrt(&var("x")), var("x").try_root(&Expr::number(2)));
    }

    #[test]
    fn powers() {
        assert_eq!(pow(&Expr::number(2), &Expr::number(10)), Ok(Expr::number(1024)));
        assert_eq!(pow(&Expr::number(2), &Expr::number(-2)), ratio(1, 4));
        assert_eq!(exp(&Expr::zero()), Ok(Expr::one()));
        assert_eq!(exp(&Expr::one()), Ok(Expr::e()));
        assert_eq!(exp(&var("x")).unwrap().to_string(), "e^x");
    }

    #[test]
    fn trigonometry() {
        assert_eq!(sin(&Expr::pi()), Ok(Expr::zero()));
        assert_eq!(cos(&Expr::pi()), Ok(Expr::minus_one()));
        let half_pi = Expr::pi().try_div(&Expr::number(2)).unwrap();
        assert_eq!(sin(&half_pi), Ok(Expr::one()));
    }

    #[test]
    fn functions_without_rules_are_kept() {
        let x = var("x");
        assert_eq!(tan(&x).unwrap().to_string(), "tan(x)");
        assert_eq!(ln(&x).unwrap().to_string(), "ln(x)");
        assert_eq!(abs(&Expr::number(-5)), Ok(Expr::number(5)));
    }
}

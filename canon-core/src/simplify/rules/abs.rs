//! Simplification rules for absolute values.

use crate::{
    error::Error,
    expr::{Constant, Expr, UnaryOp},
    simplify::Simplified,
};
use super::is_even;

/// Applies all absolute value rules.
///
/// - `|n|` folds for literal `n`
/// - `|π| = π` and `|e| = e`
/// - `||a|| = |a|`
/// - `|-a| = |a|`
/// - `|a^n| = a^n` for even literal `n`
pub fn abs(x: &Expr) -> Simplified {
    if let Some(n) = x.as_number() {
        let magnitude = n.checked_abs().ok_or(Error::Overflow)?;
        return Ok(Some(Expr::number(magnitude)));
    }
    if matches!(x.as_constant(), Some(Constant::Pi | Constant::E)) {
        return Ok(Some(x.clone()));
    }
    if x.as_unary(UnaryOp::Abs).is_some() {
        return Ok(Some(x.clone()));
    }
    if let Some(inner) = x.as_negation() {
        return Ok(Some(inner.try_abs()?));
    }
    match x.as_power() {
        Some((_, exponent)) if is_even(exponent) => Ok(Some(x.clone())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(Expr::number(-5).try_abs(), Ok(Expr::number(5)));
        assert_eq!(Expr::number(5).try_abs(), Ok(Expr::number(5)));
        assert_eq!(Expr::number(i64::MIN).try_abs(), Err(Error::Overflow));
        assert_eq!(Expr::pi().try_abs(), Ok(Expr::pi()));
        assert_eq!(Expr::i().try_abs().unwrap().operand(), Ok(&Expr::i()));
    }

    #[test]
    fn symbolic() {
        let x = Expr::variable("x").unwrap();
        let abs_x = x.try_abs().unwrap();
        assert_eq!(abs_x.operand(), Ok(&x));
        assert!(abs_x.try_abs().unwrap().ptr_eq(&abs_x));
        assert_eq!(x.try_neg().unwrap().try_abs(), Ok(abs_x));

        let square = x.try_pow(&Expr::number(2)).unwrap();
        assert!(square.try_abs().unwrap().ptr_eq(&square));
    }
}

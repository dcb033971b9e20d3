//! Simplification rules for negation.

use crate::{
    error::Error,
    expr::Expr,
    simplify::{fraction::{as_rational, ratio}, Simplified},
};

/// `-(-a) = a`
fn double_negation(x: &Expr) -> Option<Expr> {
    x.as_negation().cloned()
}

/// `-(n)` folds for literal `n`, and `-(p/q) = (-p)/q` for literal rationals
fn negate_literal(x: &Expr) -> Simplified {
    let Some((numerator, denominator, _)) = as_rational(x) else {
        return Ok(None);
    };
    let numerator = numerator.checked_neg().ok_or(Error::Overflow)?;
    if denominator == 1 {
        Ok(Some(Expr::number(numerator)))
    } else {
        Ok(Some(ratio(numerator, denominator)?))
    }
}

/// `-(a-b) = b-a`
fn negate_subtraction(x: &Expr) -> Simplified {
    match x.as_subtraction() {
        Some((a, b)) => Ok(Some(b.try_sub(a)?)),
        None => Ok(None),
    }
}

/// Applies all negation rules.
pub fn negate(x: &Expr) -> Simplified {
    if let Some(expr) = double_negation(x) {
        return Ok(Some(expr));
    }
    if let Some(expr) = negate_literal(x)? {
        return Ok(Some(expr));
    }
    negate_subtraction(x)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::fraction::ratio;
    use super::*;

    #[test]
    fn double_negation_is_identity() {
        let (x, y) = (Expr::variable("x").unwrap(), Expr::variable("y").unwrap());
        let kept = [
            x.clone(),
            x.try_mul(&y).unwrap(),
            x.try_pow(&y).unwrap(),
            Expr::number(42),
            Expr::pi(),
        ];
        for expr in kept {
            let twice = expr.try_neg().and_then(|neg| neg.try_neg()).unwrap();
            assert!(twice.ptr_eq(&expr), "{}", expr);
        }
    }

    #[test]
    fn double_negation_of_folded_values_is_equal() {
        let (x, y) = (Expr::variable("x").unwrap(), Expr::variable("y").unwrap());
        let folded = [
            Expr::number(1000),
            ratio(3, 7).unwrap(),
            x.try_sub(&y).unwrap(),
        ];
        for expr in folded {
            let twice = expr.try_neg().and_then(|neg| neg.try_neg());
            assert_eq!(twice, Ok(expr));
        }
    }

    #[test]
    fn literals_fold() {
        assert!(Expr::number(5).try_neg().unwrap().ptr_eq(&Expr::number(-5)));
        assert_eq!(Expr::number(i64::MIN).try_neg(), Err(Error::Overflow));
        assert_eq!(ratio(1, 2).unwrap().try_neg(), ratio(-1, 2));
        assert_eq!(ratio(7, 2).unwrap().try_neg(), ratio(-7, 2));
    }

    #[test]
    fn subtraction_swaps() {
        let x = Expr::variable("x").unwrap();
        let y = Expr::variable("y").unwrap();
        let diff = x.try_sub(&y).unwrap();
        assert_eq!(diff.try_neg(), y.try_sub(&x));
    }
}

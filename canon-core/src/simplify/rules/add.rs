//! Simplification rules for addition.

use crate::{
    compare::canonical_pair,
    error::Error,
    expr::{BinaryOp, Expr, VariadicOp},
    simplify::{fraction::{combine, Operation}, Simplified},
};
use super::split_coefficient;

/// `0+a = a`
/// `a+0 = a`
fn add_zero(a: &Expr, b: &Expr) -> Option<Expr> {
    if a.is_zero() {
        Some(b.clone())
    } else if b.is_zero() {
        Some(a.clone())
    } else {
        None
    }
}

/// Folds the sum of two literal integers.
fn add_numbers(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.checked_add(b)
            .map(|n| Some(Expr::number(n)))
            .ok_or(Error::Overflow),
        _ => Ok(None),
    }
}

/// `a+a = 2*a`
fn add_same(a: &Expr, b: &Expr) -> Simplified {
    if a == b {
        Ok(Some(Expr::number(2).try_mul(a)?))
    } else {
        Ok(None)
    }
}

/// `m*a + n*a = (m+n)*a`
fn add_like_terms(a: &Expr, b: &Expr) -> Simplified {
    let (Some((m, lhs)), Some((n, rhs))) = (split_coefficient(a), split_coefficient(b)) else {
        return Ok(None);
    };
    if lhs != rhs {
        return Ok(None);
    }

    let coefficient = m.checked_add(n).ok_or(Error::Overflow)?;
    Ok(Some(Expr::number(coefficient).try_mul(&lhs)?))
}

/// `(-a) + (-b) = -(a+b)`
/// `(-a) + b = b-a`
/// `a + (-b) = a-b`
fn add_negations(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_negation(), b.as_negation()) {
        (Some(x), Some(y)) => Ok(Some(x.try_add(y)?.try_neg()?)),
        (Some(x), None) => Ok(Some(b.try_sub(x)?)),
        (None, Some(y)) => Ok(Some(a.try_sub(y)?)),
        (None, None) => Ok(None),
    }
}

/// `(a+b) + (c+d) = a+b+c+d`
/// `(a+b) + c = a+b+c`
/// `a + (b+c) = a+b+c`
fn flatten(a: &Expr, b: &Expr) -> Simplified {
    let terms: Vec<Expr> = match (a.flat_operands(VariadicOp::Add), b.flat_operands(VariadicOp::Add)) {
        (Some(lhs), Some(rhs)) => lhs.iter().chain(rhs).cloned().collect(),
        (Some(lhs), None) => lhs.iter().chain([b]).cloned().collect(),
        (None, Some(rhs)) => [a].into_iter().chain(rhs).cloned().collect(),
        (None, None) => return Ok(None),
    };
    Ok(Some(Expr::sum(terms)?))
}

/// `(a-b) + (c-d) = (a+c) - (b+d)`
/// `(a-b) + c = (a+c) - b`
/// `a + (b-c) = (a+b) - c`
fn add_subtractions(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_subtraction(), b.as_subtraction()) {
        (Some((x, y)), Some((z, w))) => Ok(Some(x.try_add(z)?.try_sub(&y.try_add(w)?)?)),
        (Some((x, y)), None) => Ok(Some(x.try_add(b)?.try_sub(y)?)),
        (None, Some((y, z))) => Ok(Some(a.try_add(y)?.try_sub(z)?)),
        (None, None) => Ok(None),
    }
}

/// `a/c + b/c = (a+b)/c`
fn add_over_common_denominator(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_division(), b.as_division()) {
        (Some((x, y)), Some((z, w))) if y == w => Ok(Some(x.try_add(z)?.try_div(y)?)),
        _ => Ok(None),
    }
}

/// Applies all addition rules.
pub fn add(a: &Expr, b: &Expr) -> Simplified {
    if let Some(expr) = add_zero(a, b) {
        return Ok(Some(expr));
    }

    let rules: [fn(&Expr, &Expr) -> Simplified; 8] = [
        add_numbers,
        add_same,
        |a: &Expr, b: &Expr| combine(a, b, Operation::Add),
        add_like_terms,
        add_negations,
        flatten,
        add_subtractions,
        add_over_common_denominator,
    ];
    for rule in rules {
        if let Some(expr) = rule(a, b)? {
            return Ok(Some(expr));
        }
    }

    Ok(canonical_pair(BinaryOp::Add, a, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::fraction::ratio;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    fn mul(a: Expr, b: Expr) -> Expr {
        Expr::binary_raw(BinaryOp::Mul, a, b)
    }

    #[test]
    fn identity_and_folding() {
        let x = var("x");
        assert!(Expr::zero().try_add(&x).unwrap().ptr_eq(&x));
        assert!(x.try_add(&Expr::zero()).unwrap().ptr_eq(&x));
        assert_eq!(Expr::number(40).try_add(&Expr::number(2)), Ok(Expr::number(42)));
        assert_eq!(Expr::number(i64::MAX).try_add(&Expr::one()), Err(Error::Overflow));
    }

    #[test]
    fn like_terms() {
        let x = var("x");
        let two_x = x.try_add(&x).unwrap();
        assert_eq!(two_x, mul(Expr::number(2), x.clone()));

        let three_x = two_x.try_add(&x).unwrap();
        assert_eq!(three_x, mul(Expr::number(3), x.clone()));

        let minus_three_x = Expr::number(-3).try_mul(&x).unwrap();
        assert_eq!(three_x.try_add(&minus_three_x), Ok(Expr::zero()));
    }

    #[test]
    fn canonical_order() {
        let x = var("x");
        let sum = x.try_add(&Expr::number(2)).unwrap();
        assert_eq!(sum.operands(), Ok((&Expr::number(2), &x)));
        assert_eq!(Expr::number(2).try_add(&x), Ok(sum));
    }

    #[test]
    fn negations_become_subtractions() {
        let (x, y) = (var("x"), var("y"));
        let neg_y = y.try_neg().unwrap();
        assert_eq!(x.try_add(&neg_y), x.try_sub(&y));
        assert_eq!(neg_y.try_add(&x), x.try_sub(&y));
        assert_eq!(neg_y.try_add(&y), Ok(Expr::zero()));
    }

    #[test]
    fn fractions() {
        assert_eq!(ratio(1, 2).unwrap().try_add(&ratio(1, 3).unwrap()), ratio(5, 6));
        assert_eq!(ratio(1, 2).unwrap().try_add(&ratio(1, 2).unwrap()), Ok(Expr::one()));
        assert_eq!(ratio(3, 4).unwrap().try_add(&ratio(3, 4).unwrap()), ratio(3, 2));
    }

    #[test]
    fn common_denominator() {
        let (x, y, z) = (var("x"), var("y"), var("z"));
        let lhs = x.try_div(&z).unwrap();
        let rhs = y.try_div(&z).unwrap();
        assert_eq!(lhs.try_add(&rhs), x.try_add(&y).unwrap().try_div(&z));
    }

    #[test]
    fn cancelling_sum() {
        let (x, y) = (var("x"), var("y"));
        let result = x.try_add(&y).unwrap()
            .try_sub(&x).unwrap()
            .try_sub(&y).unwrap();
        assert_eq!(result, Expr::zero());
    }

    #[test]
    fn repeated_sum() {
        let (x, y) = (var("x"), var("y"));
        let result = x.try_add(&y).unwrap()
            .try_add(&x).unwrap()
            .try_add(&y).unwrap();
        let expected = Expr::binary_raw(
            BinaryOp::Add,
            mul(Expr::number(2), x),
            mul(Expr::number(2), y),
        );
        assert_eq!(result, expected);
    }
}

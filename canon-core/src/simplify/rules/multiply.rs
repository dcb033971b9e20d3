//! Simplification rules for multiplication.

use crate::{
    compare::canonical_pair,
    error::Error,
    expr::{BinaryOp, Expr, VariadicOp},
    simplify::{fraction::{combine, Operation}, Simplified},
};

/// `0*a = 0`
/// `a*0 = 0`
/// `1*a = a`
/// `a*1 = a`
/// `(-1)*a = -a`
/// `a*(-1) = -a`
fn multiply_identities(a: &Expr, b: &Expr) -> Simplified {
    if a.is_zero() || b.is_zero() {
        Ok(Some(Expr::zero()))
    } else if a.is_one() {
        Ok(Some(b.clone()))
    } else if b.is_one() {
        Ok(Some(a.clone()))
    } else if a.is_minus_one() {
        Ok(Some(b.try_neg()?))
    } else if b.is_minus_one() {
        Ok(Some(a.try_neg()?))
    } else {
        Ok(None)
    }
}

/// Folds the product of two literal integers.
fn multiply_numbers(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.checked_mul(b)
            .map(|n| Some(Expr::number(n)))
            .ok_or(Error::Overflow),
        _ => Ok(None),
    }
}

/// `a*a = a^2`
fn multiply_same(a: &Expr, b: &Expr) -> Simplified {
    if a == b {
        Ok(Some(a.try_pow(&Expr::number(2))?))
    } else {
        Ok(None)
    }
}

/// `(-a) * (-b) = a*b`
/// `(-a) * b = -(a*b)`
/// `a * (-b) = -(a*b)`
fn multiply_negations(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_negation(), b.as_negation()) {
        (Some(x), Some(y)) => Ok(Some(x.try_mul(y)?)),
        (Some(x), None) => Ok(Some(x.try_mul(b)?.try_neg()?)),
        (None, Some(y)) => Ok(Some(a.try_mul(y)?.try_neg()?)),
        (None, None) => Ok(None),
    }
}

/// `a^m * a^n = a^(m+n)`
/// `a^m * a = a^(m+1)`
/// `a * a^n = a^(1+n)`
fn multiply_powers(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_power(), b.as_power()) {
        (Some((x, m)), Some((y, n))) if x == y => Ok(Some(x.try_pow(&m.try_add(n)?)?)),
        (Some((x, m)), _) if x == b => Ok(Some(x.try_pow(&m.try_add(&Expr::one())?)?)),
        (_, Some((y, n))) if y == a => Ok(Some(y.try_pow(&Expr::one().try_add(n)?)?)),
        _ => Ok(None),
    }
}

/// `c * b^n = (c / b^k) * b^(k+n)`, where `b^k` is the largest power of the literal base `b` that
/// divides the literal `c`.
///
/// For example, `8 * 2^t = 2^(3+t)` and `48 * 2^t = 3 * 2^(4+t)`.
fn merge_numeric_power(a: &Expr, b: &Expr) -> Simplified {
    let (number, power) = match (a.as_number(), b.as_number()) {
        (Some(n), None) => (n, b),
        (None, Some(n)) => (n, a),
        _ => return Ok(None),
    };
    let Some((base, exponent)) = power.as_power() else {
        return Ok(None);
    };
    let Some(base_value) = base.as_number() else {
        return Ok(None);
    };
    if number < 2 || base_value < 2 {
        return Ok(None);
    }

    let mut rest = number;
    let mut count = 0;
    while rest % base_value == 0 {
        rest /= base_value;
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }

    let exponent = Expr::number(count).try_add(exponent)?;
    Ok(Some(Expr::number(rest).try_mul(&base.try_pow(&exponent)?)?))
}

/// `(a/b) * (c/d) = (a*c) / (b*d)`
/// `(a/b) * c = (a*c) / b`
/// `a * (b/c) = (a*b) / c`
fn multiply_divisions(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_division(), b.as_division()) {
        (Some((x, y)), Some((z, w))) => Ok(Some(x.try_mul(z)?.try_div(&y.try_mul(w)?)?)),
        (Some((x, y)), None) => Ok(Some(x.try_mul(b)?.try_div(y)?)),
        (None, Some((y, z))) => Ok(Some(a.try_mul(y)?.try_div(z)?)),
        (None, None) => Ok(None),
    }
}

/// `(a*b) * (c*d) = a*b*c*d`
/// `(a*b) * c = a*b*c`
/// `a * (b*c) = a*b*c`
fn flatten(a: &Expr, b: &Expr) -> Simplified {
    let factors: Vec<Expr> = match (a.flat_operands(VariadicOp::Mul), b.flat_operands(VariadicOp::Mul)) {
        (Some(lhs), Some(rhs)) => lhs.iter().chain(rhs).cloned().collect(),
        (Some(lhs), None) => lhs.iter().chain([b]).cloned().collect(),
        (None, Some(rhs)) => [a].into_iter().chain(rhs).cloned().collect(),
        (None, None) => return Ok(None),
    };
    Ok(Some(Expr::product(factors)?))
}

/// Applies all multiplication rules.
pub fn multiply(a: &Expr, b: &Expr) -> Simplified {
    let rules: [fn(&Expr, &Expr) -> Simplified; 9] = [
        multiply_identities,
        multiply_numbers,
        |a: &Expr, b: &Expr| combine(a, b, Operation::Mul),
        multiply_same,
        multiply_negations,
        multiply_powers,
        merge_numeric_power,
        multiply_divisions,
        flatten,
    ];
    for rule in rules {
        if let Some(expr) = rule(a, b)? {
            return Ok(Some(expr));
        }
    }

    Ok(canonical_pair(BinaryOp::Mul, a, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::fraction::ratio;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    fn pow(base: Expr, exponent: Expr) -> Expr {
        Expr::binary_raw(BinaryOp::Pow, base, exponent)
    }

    #[test]
    fn identities() {
        let x = var("x");
        assert_eq!(x.try_mul(&Expr::zero()), Ok(Expr::zero()));
        assert!(Expr::one().try_mul(&x).unwrap().ptr_eq(&x));
        assert_eq!(Expr::minus_one().try_mul(&x), x.try_neg());
        assert_eq!(Expr::number(6).try_mul(&Expr::number(7)), Ok(Expr::number(42)));
        assert_eq!(Expr::number(i64::MAX).try_mul(&Expr::number(2)), Err(Error::Overflow));
    }

    #[test]
    fn squares() {
        let x = var("x");
        assert_eq!(x.try_mul(&x), Ok(pow(x.clone(), Expr::number(2))));

        let x_squared = x.try_mul(&x).unwrap();
        assert_eq!(x_squared.try_mul(&x), Ok(pow(x.clone(), Expr::number(3))));
        assert_eq!(x_squared.try_mul(&x_squared), Ok(pow(x, Expr::number(4))));
    }

    #[test]
    fn numeric_powers() {
        let t = var("t");
        let two_t = Expr::number(2).try_pow(&t).unwrap();
        assert_eq!(two_t, pow(Expr::number(2), t.clone()));

        let merged = Expr::number(8).try_mul(&two_t).unwrap();
        let exponent = Expr::number(3).try_add(&t).unwrap();
        assert_eq!(merged, pow(Expr::number(2), exponent));

        let merged = Expr::number(48).try_mul(&two_t).unwrap();
        let exponent = Expr::number(4).try_add(&t).unwrap();
        let expected = Expr::binary_raw(BinaryOp::Mul, Expr::number(3), pow(Expr::number(2), exponent));
        assert_eq!(merged, expected);
    }

    #[test]
    fn fractions() {
        let product = ratio(9, 4).unwrap().try_mul(&ratio(4, 9).unwrap());
        assert_eq!(product, Ok(Expr::one()));
        assert_eq!(Expr::number(3).try_mul(&ratio(1, 2).unwrap()), ratio(3, 2));
    }

    #[test]
    fn scaled_division() {
        let x = var("x");
        let half_x = ratio(1, 2).unwrap().try_mul(&x).unwrap();
        assert_eq!(half_x, Expr::binary_raw(BinaryOp::Div, x, Expr::number(2)));
    }

    #[test]
    fn negations() {
        let (x, y) = (var("x"), var("y"));
        let (neg_x, neg_y) = (x.try_neg().unwrap(), y.try_neg().unwrap());
        assert_eq!(neg_x.try_mul(&neg_y), x.try_mul(&y));
        assert_eq!(neg_x.try_mul(&y), x.try_mul(&y).unwrap().try_neg());
    }

    #[test]
    fn products_flatten_and_sort() {
        let (x, y) = (var("x"), var("y"));
        let xy = y.try_mul(&x).unwrap();
        assert_eq!(xy.operands(), Ok((&x, &y)));

        let product = Expr::pi().try_mul(&xy).unwrap().try_mul(&Expr::number(2)).unwrap();
        assert_eq!(product.terms(), Ok(&[Expr::number(2), Expr::pi(), x, y][..]));
    }
}

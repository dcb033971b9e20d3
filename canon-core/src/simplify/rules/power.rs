//! Simplification rules for exponentiation.

use crate::{
    arith::checked_pow,
    expr::{BinaryOp, Constant, Expr, VariadicOp},
    simplify::{fraction::{as_rational, ratio, Shape}, Simplified},
};
use super::{is_even, is_odd};
use tracing::debug;

/// `n^0 = 1` for a non-zero literal number or constant `n`
/// `a^1 = a`
///
/// `0^0` and `x^0` for symbolic `x` are left alone.
fn power_identities(a: &Expr, n: i64) -> Option<Expr> {
    match n {
        0 if a.as_number().map_or(a.as_constant().is_some(), |v| v != 0) => Some(Expr::one()),
        1 => Some(a.clone()),
        _ => None,
    }
}

/// Folds a literal integer raised to a literal integer.
///
/// A negative exponent produces a fraction. On overflow, an even power of a negative base is
/// rewritten with the base's magnitude and otherwise the power is left as-is.
fn power_numbers(a: &Expr, b: &Expr, n: i64) -> Simplified {
    let Some(base) = a.as_number() else {
        return Ok(None);
    };

    let magnitude = n.unsigned_abs();
    match checked_pow(base, magnitude) {
        Ok(value) if n >= 0 => Ok(Some(Expr::number(value))),
        Ok(value) => Ok(Some(Expr::one().try_div(&Expr::number(value))?)),
        Err(_) => {
            debug!(base, exponent = n, "integer power does not fit; leaving unevaluated");
            match base.checked_abs() {
                Some(positive) if base < 0 && n >= 0 && n % 2 == 0 => {
                    Ok(Some(Expr::binary_raw(BinaryOp::Pow, Expr::number(positive), b.clone())))
                },
                _ => Ok(None),
            }
        },
    }
}

/// `(m + p/q)^n = (mq+p)^n / q^n` for a mixed number, if both powers fit an `i64`
fn power_mixed_number(a: &Expr, n: i64) -> Simplified {
    let Some((numerator, denominator, Shape::Mixed)) = as_rational(a) else {
        return Ok(None);
    };
    let magnitude = n.unsigned_abs();
    let (Ok(numerator), Ok(denominator)) =
        (checked_pow(numerator, magnitude), checked_pow(denominator, magnitude))
    else {
        return Ok(None);
    };

    if n >= 0 {
        Ok(Some(ratio(numerator, denominator)?))
    } else {
        Ok(Some(ratio(denominator, numerator)?))
    }
}

/// `|a|^n = a^n` for even `n`
/// `(-a)^n = a^n` for even `n`
/// `(-a)^n = -(a^n)` for odd `n`
fn power_signs(a: &Expr, b: &Expr) -> Simplified {
    if let Some(x) = a.as_unary(crate::expr::UnaryOp::Abs) {
        if is_even(b) {
            return Ok(Some(x.try_pow(b)?));
        }
    }
    if let Some(x) = a.as_negation() {
        if is_even(b) {
            return Ok(Some(x.try_pow(b)?));
        }
        if is_odd(b) {
            return Ok(Some(x.try_pow(b)?.try_neg()?));
        }
    }
    Ok(None)
}

/// `i^n` cycles through `1, i, -1, -i`
fn power_imaginary(a: &Expr, n: i64) -> Simplified {
    if a.as_constant() != Some(Constant::I) {
        return Ok(None);
    }
    let expr = match n.rem_euclid(4) {
        0 => Expr::one(),
        1 => Expr::i(),
        2 => Expr::minus_one(),
        _ => Expr::i().try_neg()?,
    };
    Ok(Some(expr))
}

/// `root(a, n)^n = a`
fn power_of_root(a: &Expr, b: &Expr) -> Option<Expr> {
    match a.as_root() {
        Some((radicand, index)) if index == b => Some(radicand.clone()),
        _ => None,
    }
}

/// `(a^m)^n = a^(m*n)`
fn power_of_power(a: &Expr, b: &Expr) -> Simplified {
    match a.as_power() {
        Some((base, exponent)) => Ok(Some(base.try_pow(&exponent.try_mul(b)?)?)),
        None => Ok(None),
    }
}

/// `(a*b)^n = a^n * b^n`
fn power_of_product(a: &Expr, b: &Expr) -> Simplified {
    let Some(factors) = a.flat_operands(VariadicOp::Mul) else {
        return Ok(None);
    };
    let factors = factors.iter()
        .map(|factor| factor.try_pow(b))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Expr::product(factors)?))
}

/// `(a/b)^n = a^n / b^n`
fn power_of_quotient(a: &Expr, b: &Expr) -> Simplified {
    match a.as_division() {
        Some((x, y)) => Ok(Some(x.try_pow(b)?.try_div(&y.try_pow(b)?)?)),
        None => Ok(None),
    }
}

/// Applies all exponentiation rules.
pub fn power(a: &Expr, b: &Expr) -> Simplified {
    if let Some(n) = b.as_number() {
        if let Some(expr) = power_identities(a, n) {
            return Ok(Some(expr));
        }
        if a.is_number() {
            return power_numbers(a, b, n);
        }
        if let Some(expr) = power_mixed_number(a, n)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = power_signs(a, b)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = power_imaginary(a, n)? {
            return Ok(Some(expr));
        }
    }

    if let Some(expr) = power_of_root(a, b) {
        return Ok(Some(expr));
    }
    let rules: [fn(&Expr, &Expr) -> Simplified; 3] = [
        power_of_power,
        power_of_product,
        power_of_quotient,
    ];
    for rule in rules {
        if let Some(expr) = rule(a, b)? {
            return Ok(Some(expr));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{error::Error, simplify::fraction::ratio};
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    fn n(value: i64) -> Expr {
        Expr::number(value)
    }

    #[test]
    fn zero_exponent() {
        assert_eq!(n(7).try_pow(&n(0)), Ok(Expr::one()));
        assert_eq!(Expr::pi().try_pow(&n(0)), Ok(Expr::one()));

        let zero_zero = n(0).try_pow(&n(0)).unwrap();
        assert_eq!(zero_zero.operands(), Ok((&n(0), &n(0))));

        let x = var("x");
        assert_eq!(x.try_pow(&n(0)).unwrap().operands(), Ok((&x, &n(0))));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(n(2).try_pow(&n(10)), Ok(n(1024)));
        assert_eq!(n(-3).try_pow(&n(3)), Ok(n(-27)));
        assert_eq!(n(2).try_pow(&n(-2)), ratio(1, 4));
        assert_eq!(n(0).try_pow(&n(-1)), Err(Error::DivideByZero));
    }

    #[test]
    fn overflowing_powers_stay_unevaluated() {
        let big = n(2).try_pow(&n(64)).unwrap();
        assert_eq!(big.operands(), Ok((&n(2), &n(64))));

        let even = n(-2).try_pow(&n(64)).unwrap();
        assert_eq!(even, big);

        let odd = n(-2).try_pow(&n(65)).unwrap();
        assert_eq!(odd.operands(), Ok((&n(-2), &n(65))));
    }

    #[test]
    fn imaginary_unit_cycles() {
        let i = Expr::i();
        assert_eq!(i.try_pow(&n(2)), Ok(n(-1)));
        assert_eq!(i.try_pow(&n(3)), i.try_neg());
        assert_eq!(i.try_pow(&n(4)), Ok(n(1)));
        assert!(i.try_pow(&n(5)).unwrap().ptr_eq(&i));
        assert_eq!(i.try_pow(&n(-1)), i.try_neg());
    }

    #[test]
    fn signs() {
        let x = var("x");
        let neg_x = x.try_neg().unwrap();
        let square = x.try_pow(&n(2)).unwrap();
        assert_eq!(neg_x.try_pow(&n(2)), Ok(square.clone()));
        assert_eq!(neg_x.try_pow(&n(3)), x.try_pow(&n(3)).unwrap().try_neg());
        assert_eq!(x.try_abs().unwrap().try_pow(&n(2)), Ok(square));
    }

    #[test]
    fn nested_powers_and_roots() {
        let (x, y) = (var("x"), var("y"));
        let square = x.try_pow(&n(2)).unwrap();
        assert_eq!(square.try_pow(&y), x.try_pow(&n(2).try_mul(&y).unwrap()));
        assert_eq!(x.try_root(&n(3)).unwrap().try_pow(&n(3)), Ok(x));
    }

    #[test]
    fn distributes_over_products_and_quotients() {
        let (x, y) = (var("x"), var("y"));
        let product = n(2).try_mul(&x).unwrap();
        let expected = n(4).try_mul(&x.try_pow(&n(2)).unwrap()).unwrap();
        assert_eq!(product.try_pow(&n(2)), Ok(expected));

        let quotient = x.try_div(&y).unwrap();
        let squared = quotient.try_pow(&n(2)).unwrap();
        let expected = Expr::binary_raw(
            BinaryOp::Mul,
            Expr::binary_raw(BinaryOp::Pow, x, n(2)),
            Expr::binary_raw(BinaryOp::Pow, y, n(-2)),
        );
        assert_eq!(squared, expected);
        assert_eq!(squared.to_string(), "x^2 * y^(-2)");
        assert_eq!(ratio(2, 3).unwrap().try_pow(&n(2)), ratio(4, 9));
    }

    #[test]
    fn mixed_numbers() {
        let three_halves = ratio(3, 2).unwrap();
        assert_eq!(three_halves.try_pow(&n(2)), ratio(9, 4));
        assert_eq!(three_halves.try_pow(&n(-1)), ratio(2, 3));
    }
}

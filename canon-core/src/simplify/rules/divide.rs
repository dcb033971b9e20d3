//! Simplification rules for division.

use crate::{
    arith::checked_pow,
    error::Error,
    expr::{Expr, VariadicOp},
    simplify::{fraction::{combine, simplify_fraction, Operation}, Simplified},
};

/// `a/0` is an error
/// `a/1 = a`
/// `a/(-1) = -a`
/// `0/n = 0` for a literal number or constant `n`
fn divide_identities(a: &Expr, b: &Expr) -> Simplified {
    if b.is_zero() {
        Err(Error::DivideByZero)
    } else if b.is_one() {
        Ok(Some(a.clone()))
    } else if b.is_minus_one() {
        Ok(Some(a.try_neg()?))
    } else if a.is_zero() && (b.is_number() || b.as_constant().is_some()) {
        Ok(Some(Expr::zero()))
    } else {
        Ok(None)
    }
}

/// Reduces the quotient of two literal integers to lowest terms.
fn divide_numbers(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => simplify_fraction(a, b),
        _ => Ok(None),
    }
}

/// `c/c = 1` for a constant `c`
fn divide_same_constant(a: &Expr, b: &Expr) -> Simplified {
    Ok((a.as_constant().is_some() && a == b).then(Expr::one))
}

/// `(-a) / (-b) = a/b`
/// `(-a) / b = -(a/b)`
/// `a / (-b) = -(a/b)`
fn divide_negations(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_negation(), b.as_negation()) {
        (Some(x), Some(y)) => Ok(Some(x.try_div(y)?)),
        (Some(x), None) => Ok(Some(x.try_div(b)?.try_neg()?)),
        (None, Some(y)) => Ok(Some(a.try_div(y)?.try_neg()?)),
        (None, None) => Ok(None),
    }
}

/// `a^m / a^n = a^(m-n)`
/// `a^m / a = a^(m-1)`
/// `c / b^n` folds for literal `c`, `b` and `n` that fit an `i64`
/// `a / b^n = a * b^(-n)`
fn divide_powers(a: &Expr, b: &Expr) -> Simplified {
    if let (Some((x, m)), Some((y, n))) = (a.as_power(), b.as_power()) {
        if x == y {
            return Ok(Some(x.try_pow(&m.try_sub(n)?)?));
        }
    }
    if let Some((x, m)) = a.as_power() {
        if x == b {
            return Ok(Some(x.try_pow(&m.try_sub(&Expr::one())?)?));
        }
    }

    let Some((base, exponent)) = b.as_power() else {
        return Ok(None);
    };
    if let (Some(numerator), Some(base_value), Some(exponent_value)) =
        (a.as_number(), base.as_number(), exponent.as_number())
    {
        if exponent_value >= 0 {
            if let Ok(denominator) = checked_pow(base_value, exponent_value as u64) {
                return simplify_fraction(numerator, denominator);
            }
        }
    }

    Ok(Some(a.try_mul(&base.try_pow(&exponent.try_neg()?)?)?))
}

/// `(a/b) / (c/d) = (a*d) / (b*c)`
/// `(a/b) / c = a / (b*c)`
/// `a / (b/c) = (a*c) / b`
fn divide_divisions(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_division(), b.as_division()) {
        (Some((x, y)), Some((z, w))) => Ok(Some(x.try_mul(w)?.try_div(&y.try_mul(z)?)?)),
        (Some((x, y)), None) => Ok(Some(x.try_div(&y.try_mul(b)?)?)),
        (None, Some((y, z))) => Ok(Some(a.try_mul(z)?.try_div(y)?)),
        (None, None) => Ok(None),
    }
}

/// `(a*b*c) / d = a*(b/d)*c` if `b/d` simplifies
///
/// Only the first factor that divides cleanly absorbs the divisor.
fn divide_product(a: &Expr, b: &Expr) -> Simplified {
    let Some(factors) = a.flat_operands(VariadicOp::Mul) else {
        return Ok(None);
    };

    for (index, factor) in factors.iter().enumerate() {
        if let Some(quotient) = divide(factor, b)? {
            let mut factors = factors.to_vec();
            factors[index] = quotient;
            return Ok(Some(Expr::product(factors)?));
        }
    }
    Ok(None)
}

/// `(a+b+c) / d = a/d + (b+c)/d` for every term `a` whose quotient simplifies
fn divide_sum(a: &Expr, b: &Expr) -> Simplified {
    let Some(terms) = a.flat_operands(VariadicOp::Add) else {
        return Ok(None);
    };

    let mut simplified = Vec::new();
    let mut remainder = Vec::new();
    for term in terms {
        match divide(term, b)? {
            Some(quotient) => simplified.push(quotient),
            None => remainder.push(term.clone()),
        }
    }
    if simplified.is_empty() {
        return Ok(None);
    }

    if !remainder.is_empty() {
        simplified.push(Expr::sum(remainder)?.try_div(b)?);
    }
    Ok(Some(Expr::sum(simplified)?))
}

/// `(a-b) / c = a/c - b/c` if either quotient simplifies
fn divide_difference(a: &Expr, b: &Expr) -> Simplified {
    let Some((x, y)) = a.as_subtraction() else {
        return Ok(None);
    };
    if divide(x, b)?.is_none() && divide(y, b)?.is_none() {
        return Ok(None);
    }
    Ok(Some(x.try_div(b)?.try_sub(&y.try_div(b)?)?))
}

/// Applies all division rules.
pub fn divide(a: &Expr, b: &Expr) -> Simplified {
    let rules: [fn(&Expr, &Expr) -> Simplified; 10] = [
        divide_identities,
        divide_numbers,
        divide_same_constant,
        |a: &Expr, b: &Expr| combine(a, b, Operation::Div),
        divide_negations,
        divide_powers,
        divide_divisions,
        divide_product,
        divide_sum,
        divide_difference,
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
    use crate::{expr::BinaryOp, simplify::fraction::ratio};
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn identities() {
        let x = var("x");
        assert_eq!(x.try_div(&Expr::zero()), Err(Error::DivideByZero));
        assert_eq!(Expr::zero().try_div(&Expr::zero()), Err(Error::DivideByZero));
        assert!(x.try_div(&Expr::one()).unwrap().ptr_eq(&x));
        assert_eq!(x.try_div(&Expr::minus_one()), x.try_neg());
        assert_eq!(Expr::zero().try_div(&Expr::pi()), Ok(Expr::zero()));
        assert_eq!(Expr::pi().try_div(&Expr::pi()), Ok(Expr::one()));
    }

    #[test]
    fn symbolic_zero_is_not_assumed() {
        let x = var("x");
        let zero_over_x = Expr::zero().try_div(&x).unwrap();
        assert_eq!(zero_over_x, Expr::binary_raw(BinaryOp::Div, Expr::zero(), x.clone()));

        let x_over_x = x.try_div(&x).unwrap();
        assert_eq!(x_over_x.operands(), Ok((&x, &x)));
    }

    #[test]
    fn literal_fractions() {
        assert_eq!(Expr::number(6).try_div(&Expr::number(3)), Ok(Expr::number(2)));
        assert_eq!(Expr::number(2).try_div(&Expr::number(4)), ratio(1, 2));
        assert_eq!(ratio(1, 2).unwrap().try_div(&ratio(1, 4).unwrap()), Ok(Expr::number(2)));
    }

    #[test]
    fn distributes_over_sums() {
        let t = var("t");
        let sum = Expr::number(2).try_add(&t).unwrap();
        let expected = Expr::one().try_add(&t.try_div(&Expr::number(2)).unwrap()).unwrap();
        assert_eq!(sum.try_div(&Expr::number(2)), Ok(expected));
    }

    #[test]
    fn cancels_factors() {
        let t = var("t");
        let product = Expr::product(vec![Expr::number(2), Expr::pi(), t.clone()]).unwrap();
        let expected = Expr::binary_raw(BinaryOp::Mul, Expr::number(2), t);
        assert_eq!(product.try_div(&Expr::pi()), Ok(expected));
    }

    #[test]
    fn powers() {
        let x = var("x");
        let cube = x.try_pow(&Expr::number(3)).unwrap();
        let square = x.try_pow(&Expr::number(2)).unwrap();
        assert_eq!(cube.try_div(&x), Ok(square.clone()));
        assert_eq!(cube.try_div(&square), Ok(x));
    }

    #[test]
    fn nested_divisions() {
        let (x, y, z) = (var("x"), var("y"), var("z"));
        let x_over_y = x.try_div(&y).unwrap();
        let expected = x.try_div(&y.try_mul(&z).unwrap()).unwrap();
        assert_eq!(x_over_y.try_div(&z), Ok(expected));
    }
}

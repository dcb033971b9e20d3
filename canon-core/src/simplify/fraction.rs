//! Exact rational arithmetic on literal fractions.
//!
//! There is no fraction node. A reduced fraction is a division of two numbers with a positive
//! denominator, and an improper fraction is written as an integer plus a proper fraction:
//! `7/2` is `3 + 1/2` and `-7/2` is `-3 + -1/2`.

use crate::{arith::gcd, error::Error, expr::Expr};
use super::Simplified;

/// Reduces `numerator / denominator` to canonical form.
///
/// Returns [`None`] if the fraction is already proper and in lowest terms with a positive
/// denominator, in which case the raw division node is canonical.
pub fn simplify_fraction(numerator: i64, denominator: i64) -> Simplified {
    if denominator == 0 {
        return Err(Error::DivideByZero);
    }
    if numerator == 0 {
        return Ok(Some(Expr::zero()));
    }
    if denominator == 1 {
        return Ok(Some(Expr::number(numerator)));
    }
    if numerator == denominator {
        return Ok(Some(Expr::one()));
    }
    if denominator < 0 {
        let numerator = numerator.checked_neg().ok_or(Error::Overflow)?;
        let denominator = denominator.checked_neg().ok_or(Error::Overflow)?;
        return Ok(Some(ratio(numerator, denominator)?));
    }

    // the denominator is positive here, so the divisor fits in an `i64`
    let divisor = gcd(numerator, denominator) as i64;
    if divisor > 1 {
        return Ok(Some(ratio(numerator / divisor, denominator / divisor)?));
    }

    if numerator.unsigned_abs() > denominator.unsigned_abs() {
        let whole = Expr::number(numerator / denominator);
        let part = ratio(numerator % denominator, denominator)?;
        return Ok(Some(whole.try_add(&part)?));
    }

    Ok(None)
}

/// Builds `numerator / denominator` through the smart constructors.
pub fn ratio(numerator: i64, denominator: i64) -> Result<Expr, Error> {
    Expr::number(numerator).try_div(&Expr::number(denominator))
}

/// The shape of a literal rational number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A plain integer.
    Integer,

    /// A division of two integers.
    Fraction,

    /// An integer plus a division of two integers.
    Mixed,
}

/// Reads `expr` as a literal rational `(numerator, denominator)`, if it is one.
///
/// Integers, divisions of integers and mixed numbers (`n + p/q`) are recognized. Returns [`None`]
/// for anything else, or if the mixed number does not fit an `i64` fraction.
pub fn as_rational(expr: &Expr) -> Option<(i64, i64, Shape)> {
    if let Some(n) = expr.as_number() {
        return Some((n, 1, Shape::Integer));
    }
    if let Some((p, q)) = as_fraction(expr) {
        return Some((p, q, Shape::Fraction));
    }

    let (whole, part) = expr.as_binary(crate::expr::BinaryOp::Add)?;
    let whole = whole.as_number()?;
    let (p, q) = as_fraction(part)?;
    let numerator = whole.checked_mul(q)?.checked_add(p)?;
    Some((numerator, q, Shape::Mixed))
}

fn as_fraction(expr: &Expr) -> Option<(i64, i64)> {
    let (p, q) = expr.as_division()?;
    Some((p.as_number()?, q.as_number()?))
}

/// The arithmetic operations [`combine`] can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

/// Combines two literal rationals exactly.
///
/// Two integers are left to ordinary folding. For sums and differences of an integer and a plain
/// fraction, the rule only fires if the result is a proper fraction: otherwise `n + p/q` is
/// already the canonical mixed form, and rewriting it would loop.
pub fn combine(a: &Expr, b: &Expr, operation: Operation) -> Simplified {
    let (Some((p, q, a_shape)), Some((r, s, b_shape))) = (as_rational(a), as_rational(b)) else {
        return Ok(None);
    };
    if a_shape == Shape::Integer && b_shape == Shape::Integer {
        return Ok(None);
    }

    let mul = |x: i64, y: i64| x.checked_mul(y).ok_or(Error::Overflow);
    let (numerator, denominator) = match operation {
        Operation::Add => (mul(p, s)?.checked_add(mul(r, q)?).ok_or(Error::Overflow)?, mul(q, s)?),
        Operation::Sub => (mul(p, s)?.checked_sub(mul(r, q)?).ok_or(Error::Overflow)?, mul(q, s)?),
        Operation::Mul => (mul(p, r)?, mul(q, s)?),
        Operation::Div => (mul(p, s)?, mul(q, r)?),
    };

    let mixes_integer_and_fraction = matches!(
        (a_shape, b_shape),
        (Shape::Integer, Shape::Fraction) | (Shape::Fraction, Shape::Integer),
    );
    if matches!(operation, Operation::Add | Operation::Sub)
        && mixes_integer_and_fraction
        && numerator.unsigned_abs() >= denominator.unsigned_abs()
    {
        return Ok(None);
    }

    Ok(Some(ratio(numerator, denominator)?))
}

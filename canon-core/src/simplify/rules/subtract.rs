//! Simplification rules for subtraction.

use crate::{
    error::Error,
    expr::{Expr, VariadicOp},
    simplify::{fraction::{combine, Operation}, Simplified},
};
use super::split_coefficient;

/// `0-a = -a`
/// `a-0 = a`
fn subtract_zero(a: &Expr, b: &Expr) -> Simplified {
    if a.is_zero() {
        Ok(Some(b.try_neg()?))
    } else if b.is_zero() {
        Ok(Some(a.clone()))
    } else {
        Ok(None)
    }
}

/// `a-a = 0`
fn subtract_same(a: &Expr, b: &Expr) -> Simplified {
    Ok((a == b).then(Expr::zero))
}

/// Folds the difference of two literal integers.
fn subtract_numbers(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.checked_sub(b)
            .map(|n| Some(Expr::number(n)))
            .ok_or(Error::Overflow),
        _ => Ok(None),
    }
}

/// `m*a - n*a = (m-n)*a`
fn subtract_like_terms(a: &Expr, b: &Expr) -> Simplified {
    let (Some((m, lhs)), Some((n, rhs))) = (split_coefficient(a), split_coefficient(b)) else {
        return Ok(None);
    };
    if lhs != rhs {
        return Ok(None);
    }

    let coefficient = m.checked_sub(n).ok_or(Error::Overflow)?;
    Ok(Some(Expr::number(coefficient).try_mul(&lhs)?))
}

/// `a - (-n) = a+n` for a literal `n`
fn subtract_negative_number(a: &Expr, b: &Expr) -> Simplified {
    match b.as_number() {
        Some(n) if n < 0 => {
            let n = n.checked_neg().ok_or(Error::Overflow)?;
            Ok(Some(a.try_add(&Expr::number(n))?))
        },
        _ => Ok(None),
    }
}

/// `(a+b+c) - (a+c) = b`, removing every term that appears on both sides.
fn cancel_terms(a: &Expr, b: &Expr) -> Simplified {
    let lhs = a.flat_operands(VariadicOp::Add);
    let rhs = b.flat_operands(VariadicOp::Add);
    if lhs.is_none() && rhs.is_none() {
        return Ok(None);
    }

    let mut lhs = lhs.unwrap_or(std::slice::from_ref(a)).to_vec();
    let mut rhs_rest = Vec::new();
    for term in rhs.unwrap_or(std::slice::from_ref(b)) {
        match lhs.iter().position(|candidate| candidate == term) {
            Some(index) => {
                lhs.remove(index);
            },
            None => rhs_rest.push(term.clone()),
        }
    }

    let removed = rhs.map_or(1, <[Expr]>::len) - rhs_rest.len();
    if removed == 0 {
        return Ok(None);
    }
    Ok(Some(Expr::sum(lhs)?.try_sub(&Expr::sum(rhs_rest)?)?))
}

/// `(a-b) - c = a - (b+c)`
fn subtract_from_subtraction(a: &Expr, b: &Expr) -> Simplified {
    match a.as_subtraction() {
        Some((x, y)) => Ok(Some(x.try_sub(&y.try_add(b)?)?)),
        None => Ok(None),
    }
}

/// `(-a) - (-b) = b-a`
/// `(-a) - b = -(a+b)`
/// `a - (-b) = a+b`
fn subtract_negations(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_negation(), b.as_negation()) {
        (Some(x), Some(y)) => Ok(Some(y.try_sub(x)?)),
        (Some(x), None) => Ok(Some(x.try_add(b)?.try_neg()?)),
        (None, Some(y)) => Ok(Some(a.try_add(y)?)),
        (None, None) => Ok(None),
    }
}

/// `a/c - b/c = (a-b)/c`
fn subtract_over_common_denominator(a: &Expr, b: &Expr) -> Simplified {
    match (a.as_division(), b.as_division()) {
        (Some((x, y)), Some((z, w))) if y == w => Ok(Some(x.try_sub(z)?.try_div(y)?)),
        _ => Ok(None),
    }
}

/// Applies all subtraction rules.
pub fn subtract(a: &Expr, b: &Expr) -> Simplified {
    let rules: [fn(&Expr, &Expr) -> Simplified; 10] = [
        subtract_zero,
        subtract_same,
        subtract_numbers,
        |a: &Expr, b: &Expr| combine(a, b, Operation::Sub),
        subtract_like_terms,
        subtract_negative_number,
        cancel_terms,
        subtract_from_subtraction,
        subtract_negations,
        subtract_over_common_denominator,
    ];
    for rule in rules {
        if let Some(expr) = rule(a, b)? {
            return Ok(Some(expr));
        }
    }
    Ok(None)
}

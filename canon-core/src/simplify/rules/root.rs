//! Simplification rules for roots.

use crate::{
    arith::simplify_root,
    expr::Expr,
    simplify::Simplified,
};
use super::is_odd;

/// `root(a, 1) = a`
fn first_root(a: &Expr, k: i64) -> Option<Expr> {
    (k == 1).then(|| a.clone())
}

/// `root(a^n, n) = a` for odd `n`
/// `root(a^n, n) = |a|` for even `n`
fn root_of_power(a: &Expr, b: &Expr) -> Simplified {
    match a.as_power() {
        Some((base, exponent)) if exponent == b => {
            if is_odd(b) {
                Ok(Some(base.clone()))
            } else {
                Ok(Some(base.try_abs()?))
            }
        },
        _ => Ok(None),
    }
}

/// Extracts perfect powers from a literal radicand: `root(72, 2) = 6*root(2, 2)`.
///
/// The odd root of a negative literal is the negated root of its magnitude, and the square root
/// of a negative literal is `i` times the square root of its magnitude. Other even roots of
/// negative literals are left alone.
fn root_of_number(a: &Expr, b: &Expr, k: i64) -> Simplified {
    let Some(n) = a.as_number() else {
        return Ok(None);
    };
    let Ok(index) = u32::try_from(k) else {
        return Ok(None);
    };
    if index < 2 {
        return Ok(None);
    }

    if n < 0 {
        let Some(magnitude) = n.checked_neg() else {
            return Ok(None);
        };
        let positive = Expr::number(magnitude).try_root(b)?;
        return if index % 2 == 1 {
            Ok(Some(positive.try_neg()?))
        } else if index == 2 {
            Ok(Some(Expr::i().try_mul(&positive)?))
        } else {
            Ok(None)
        };
    }

    let (factor, rest) = simplify_root(n as u64, index);
    // both parts divide `n`, so they fit an `i64`
    let (factor, rest) = (factor as i64, rest as i64);
    if rest == 1 {
        Ok(Some(Expr::number(factor)))
    } else if factor == 1 {
        Ok(None)
    } else {
        Ok(Some(Expr::number(factor).try_mul(&Expr::number(rest).try_root(b)?)?))
    }
}

/// `root(root(a, m), n) = root(a, m*n)`
fn root_of_root(a: &Expr, b: &Expr) -> Simplified {
    match a.as_root() {
        Some((radicand, index)) => Ok(Some(radicand.try_root(&index.try_mul(b)?)?)),
        None => Ok(None),
    }
}

/// Applies all root rules.
pub fn root(a: &Expr, b: &Expr) -> Simplified {
    if let Some(k) = b.as_number() {
        if let Some(expr) = first_root(a, k) {
            return Ok(Some(expr));
        }
        if let Some(expr) = root_of_power(a, b)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = root_of_number(a, b, k)? {
            return Ok(Some(expr));
        }
    }
    root_of_root(a, b)
}

//! Simplification rules for sine and cosine.
//!
//! Angles that are rational multiples of `π` with a denominator dividing 12 evaluate exactly
//! through [`table::exact_sine`]. Cosine reuses the same table, shifted by a quarter turn.
//! Whole quarter turns added to or subtracted from a symbolic angle are peeled off, so
//! `sin(x + π/2)` becomes `cos(x)` and `cos(x - π)` becomes `-cos(x)`.

mod table;

use crate::{
    error::Error,
    expr::{build, Expr, UnaryOp, VariadicOp},
    simplify::Simplified,
};
use table::{exact_sine, pi_multiple};

/// Returns the number of quarter turns in `expr`, if it is a whole multiple of `π/2`.
fn quarter_turns(expr: &Expr) -> Option<i64> {
    match pi_multiple(expr)? {
        (p, 1) => p.checked_mul(2),
        (p, 2) => Some(p),
        _ => None,
    }
}

/// Splits an angle into a symbolic part and a whole number of quarter turns.
fn peel_quarter_turns(angle: &Expr) -> Result<Option<(Expr, i64)>, Error> {
    if let Some(terms) = angle.flat_operands(VariadicOp::Add) {
        for (index, term) in terms.iter().enumerate() {
            if let Some(turns) = quarter_turns(term) {
                let rest = terms.iter()
                    .enumerate()
                    .filter(|&(i, _)| i != index)
                    .map(|(_, term)| term.clone())
                    .collect();
                return Ok(Some((Expr::sum(rest)?, turns)));
            }
        }
        return Ok(None);
    }

    if let Some((lhs, rhs)) = angle.as_subtraction() {
        if let Some(turns) = quarter_turns(rhs) {
            return Ok(Some((lhs.clone(), -turns)));
        }
        if let Some(turns) = quarter_turns(lhs) {
            return Ok(Some((rhs.try_neg()?, turns)));
        }
    }
    Ok(None)
}

/// Evaluates `sin(angle + turns*π/2)` in terms of `sin(angle)` or `cos(angle)`.
fn shifted_sine(angle: &Expr, turns: i64) -> Result<Expr, Error> {
    match turns.rem_euclid(4) {
        0 => build::unary(UnaryOp::Sin, angle),
        1 => build::unary(UnaryOp::Cos, angle),
        2 => build::unary(UnaryOp::Sin, angle)?.try_neg(),
        _ => build::unary(UnaryOp::Cos, angle)?.try_neg(),
    }
}

/// Shared implementation of sine and cosine; cosine is sine shifted by one quarter turn.
fn sine(angle: &Expr, offset: i64) -> Simplified {
    if let Some((p, q)) = pi_multiple(angle) {
        if let Some(expr) = exact_sine(p, q, offset)? {
            return Ok(Some(expr));
        }
    }

    if let Some((rest, turns)) = peel_quarter_turns(angle)? {
        return Ok(Some(shifted_sine(&rest, turns + offset)?));
    }
    Ok(None)
}

/// `sin(-a) = -sin(a)`, exact values at multiples of `π/12`, and quarter-turn shifts.
pub fn sin(x: &Expr) -> Simplified {
    if let Some(inner) = x.as_negation() {
        if pi_multiple(x).is_none() {
            return Ok(Some(build::unary(UnaryOp::Sin, inner)?.try_neg()?));
        }
    }
    sine(x, 0)
}

/// `cos(-a) = cos(a)`, exact values at multiples of `π/12`, and quarter-turn shifts.
pub fn cos(x: &Expr) -> Simplified {
    if let Some(inner) = x.as_negation() {
        if pi_multiple(x).is_none() {
            return Ok(Some(build::unary(UnaryOp::Cos, inner)?));
        }
    }
    sine(x, 1)
}

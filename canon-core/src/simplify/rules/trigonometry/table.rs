//! Exact values of sine at rational multiples of π.

use crate::{
    arith::gcd,
    error::Error,
    expr::{BinaryOp, Constant, Expr, Node, UnaryOp},
    simplify::{fraction::{as_rational, ratio}, Simplified},
};

/// Number of table units in a full turn. One unit is `π/12`.
const FULL_TURN: i64 = 24;

/// Number of table units in a half turn.
const HALF_TURN: i64 = 12;

/// Number of table units in a quarter turn.
const QUARTER_TURN: i64 = 6;

/// Reads `expr` as `p*π/q`, returning `(p, q)` in lowest terms with a positive `q`.
///
/// Recognizes zero, `π`, negations, products of a literal rational and `π`, and any of those
/// divided by a literal integer.
pub fn pi_multiple(expr: &Expr) -> Option<(i64, i64)> {
    let (p, q) = match expr.node() {
        Node::Number(0) => (0, 1),
        Node::Constant(Constant::Pi) => (1, 1),
        Node::Unary(UnaryOp::Neg, inner) => {
            let (p, q) = pi_multiple(inner)?;
            (p.checked_neg()?, q)
        },
        Node::Binary(BinaryOp::Mul, [lhs, rhs]) => {
            let coefficient = match (lhs.as_constant(), rhs.as_constant()) {
                (_, Some(Constant::Pi)) => lhs,
                (Some(Constant::Pi), _) => rhs,
                _ => return None,
            };
            let (p, q, _) = as_rational(coefficient)?;
            (p, q)
        },
        Node::Binary(BinaryOp::Div, [numerator, denominator]) => {
            let divisor = denominator.as_number().filter(|&d| d > 0)?;
            let (p, q) = pi_multiple(numerator)?;
            (p, q.checked_mul(divisor)?)
        },
        _ => return None,
    };

    let divisor = gcd(p, q).max(1) as i64;
    Some((p / divisor, q / divisor))
}

/// Computes `sin(p*π/q + quarter_turns*π/2)` exactly, if `q` divides 12 and the angle lands on
/// one of the tabulated values `0`, `1/2`, `√2/2`, `√3/2` or `1` (up to sign).
pub fn exact_sine(p: i64, q: i64, quarter_turns: i64) -> Simplified {
    if q <= 0 || HALF_TURN % q != 0 {
        return Ok(None);
    }

    // reduce into one full turn before scaling, so the arithmetic cannot overflow
    let p = p.rem_euclid(2 * q);
    let units = (p * (HALF_TURN / q) + quarter_turns.rem_euclid(4) * QUARTER_TURN) % FULL_TURN;

    let negative = units > HALF_TURN;
    let mut reduced = if negative { units - HALF_TURN } else { units };
    if reduced > QUARTER_TURN {
        reduced = HALF_TURN - reduced;
    }

    let value = match reduced {
        0 => Expr::zero(),
        2 => ratio(1, 2)?,
        3 => half_root(2)?,
        4 => half_root(3)?,
        6 => Expr::one(),
        _ => return Ok(None),
    };

    if negative {
        Ok(Some(value.try_neg()?))
    } else {
        Ok(Some(value))
    }
}

/// `√n / 2`
fn half_root(n: i64) -> Result<Expr, Error> {
    Expr::number(n)
        .try_root(&Expr::number(2))?
        .try_div(&Expr::number(2))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn n(value: i64) -> Expr {
        Expr::number(value)
    }

    #[test]
    fn recognizes_multiples_of_pi() {
        let pi = Expr::pi();
        assert_eq!(pi_multiple(&Expr::zero()), Some((0, 1)));
        assert_eq!(pi_multiple(&pi), Some((1, 1)));
        assert_eq!(pi_multiple(&pi.try_neg().unwrap()), Some((-1, 1)));
        assert_eq!(pi_multiple(&n(3).try_mul(&pi).unwrap()), Some((3, 1)));
        assert_eq!(pi_multiple(&pi.try_div(&n(6)).unwrap()), Some((1, 6)));

        let two_thirds = n(2).try_mul(&pi).unwrap().try_div(&n(3)).unwrap();
        assert_eq!(pi_multiple(&two_thirds), Some((2, 3)));
        assert_eq!(pi_multiple(&Expr::e()), None);
        assert_eq!(pi_multiple(&n(1)), None);
    }

    #[test]
    fn tabulated_values() {
        assert_eq!(exact_sine(0, 1, 0), Ok(Some(Expr::zero())));
        assert_eq!(exact_sine(1, 6, 0), Ok(Some(ratio(1, 2).unwrap())));
        assert_eq!(exact_sine(1, 4, 0), Ok(Some(half_root(2).unwrap())));
        assert_eq!(exact_sine(1, 3, 0), Ok(Some(half_root(3).unwrap())));
        assert_eq!(exact_sine(2, 3, 0), Ok(Some(half_root(3).unwrap())));
        assert_eq!(exact_sine(1, 2, 0), Ok(Some(Expr::one())));
        assert_eq!(exact_sine(7, 6, 0), Ok(Some(ratio(-1, 2).unwrap())));
        assert_eq!(exact_sine(3, 2, 0), Ok(Some(Expr::minus_one())));
    }

    #[test]
    fn quarter_turn_gives_cosine() {
        assert_eq!(exact_sine(0, 1, 1), Ok(Some(Expr::one())));
        assert_eq!(exact_sine(1, 1, 1), Ok(Some(Expr::minus_one())));
        assert_eq!(exact_sine(1, 3, 1), Ok(Some(ratio(1, 2).unwrap())));
        assert_eq!(exact_sine(1, 2, 1), Ok(Some(Expr::zero())));
    }

    #[test]
    fn untabulated_angles() {
        assert_eq!(exact_sine(1, 12, 0), Ok(None));
        assert_eq!(exact_sine(1, 5, 0), Ok(None));
        assert_eq!(exact_sine(1, 8, 0), Ok(None));
    }
}

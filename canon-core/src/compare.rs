//! The canonical ordering of expressions.
//!
//! Operands of additions and multiplications are sorted with [`compare`], and the two operands of
//! a binary addition or multiplication are kept in the order it dictates. The ordering is what
//! makes `x + 2` and `2 + x` the same tree.

use crate::expr::{BinaryOp, Expr, Node};
use std::cmp::Ordering;

/// Compares two expressions for canonical ordering.
///
/// Expressions are ordered by [`Expr::sort_rank`] first. On a tie, a leading numeric coefficient
/// is stripped from each side (so `3*x` sorts like `x`, next to other multiples of `x`) and the
/// ranks of what remains are compared. If those match too, leaves are compared by payload:
/// numbers by value, constants by approximation, variables by name. Anything else is
/// [`Ordering::Equal`], which a stable sort leaves in its original relative order.
pub fn compare(a: &Expr, b: &Expr) -> Ordering {
    a.sort_rank()
        .cmp(&b.sort_rank())
        .then_with(|| {
            let (a, b) = (strip_coefficient(a), strip_coefficient(b));
            a.sort_rank()
                .cmp(&b.sort_rank())
                .then_with(|| compare_payload(a, b))
        })
}

/// Returns `x` for a binary multiplication `n * x` with a literal `n`, and the expression itself
/// otherwise.
fn strip_coefficient(expr: &Expr) -> &Expr {
    match expr.as_binary(BinaryOp::Mul) {
        Some((coefficient, rest)) if coefficient.is_number() => rest,
        _ => expr,
    }
}

fn compare_payload(a: &Expr, b: &Expr) -> Ordering {
    match (a.node(), b.node()) {
        (Node::Number(a), Node::Number(b)) => a.cmp(b),
        (Node::Constant(a), Node::Constant(b)) => {
            // `None` (the imaginary unit) sorts before every real constant
            let by_value = match (a.approximation(), b.approximation()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (x, y) => x.is_some().cmp(&y.is_some()),
            };
            by_value.then_with(|| a.rank().cmp(&b.rank()))
        },
        (Node::Variable(a), Node::Variable(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Orders the operands of a binary commutative operation.
///
/// Returns the swapped node if `a` sorts after `b`, and [`None`] if the operands are already in
/// canonical order.
pub(crate) fn canonical_pair(op: BinaryOp, a: &Expr, b: &Expr) -> Option<Expr> {
    match compare(a, b) {
        Ordering::Greater => Some(Expr::binary_raw(op, b.clone(), a.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn rank_decides_first() {
        let x = var("x");
        assert_eq!(compare(&Expr::number(1000), &Expr::pi()), Ordering::Less);
        assert_eq!(compare(&Expr::pi(), &x), Ordering::Less);
        assert_eq!(compare(&x, &Expr::number(-5)), Ordering::Greater);
    }

    #[test]
    fn payloads() {
        assert_eq!(compare(&Expr::number(-3), &Expr::number(2)), Ordering::Less);
        assert_eq!(compare(&Expr::e(), &Expr::pi()), Ordering::Less);
        assert_eq!(compare(&Expr::i(), &Expr::e()), Ordering::Less);
        assert_eq!(compare(&var("y"), &var("x")), Ordering::Greater);
        assert_eq!(compare(&var("x"), &var("x")), Ordering::Equal);
    }

    #[test]
    fn coefficients_are_ignored_on_ties() {
        let (x, y) = (var("x"), var("y"));
        let three_x = Expr::binary_raw(BinaryOp::Mul, Expr::number(3), x.clone());
        let two_y = Expr::binary_raw(BinaryOp::Mul, Expr::number(2), y.clone());
        let x_y = Expr::binary_raw(BinaryOp::Mul, x, y);

        assert_eq!(compare(&three_x, &two_y), Ordering::Less);
        assert_eq!(compare(&two_y, &three_x), Ordering::Greater);

        // `x*y` has no coefficient to strip
        assert_eq!(compare(&three_x, &x_y), Ordering::Less);
    }

    #[test]
    fn pairs() {
        let x = var("x");
        let swapped = canonical_pair(BinaryOp::Add, &x, &Expr::number(99)).unwrap();
        assert_eq!(swapped.operands(), Ok((&Expr::number(99), &x)));
        assert_eq!(canonical_pair(BinaryOp::Add, &Expr::number(99), &x), None);
    }
}

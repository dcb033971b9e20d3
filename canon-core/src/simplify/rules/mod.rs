//! Rewrite rules, one module per operator.
//!
//! Each rule is documented with the identity it implements, such as `0+a = a`. Within an entry
//! point, rules are tried in order and the first one that applies wins, so more specific rules
//! come before more general ones.

pub mod abs;
pub mod add;
pub mod divide;
pub mod multiply;
pub mod negate;
pub mod power;
pub mod root;
pub mod subtract;
pub mod trigonometry;

use crate::expr::{BinaryOp, Expr, VariadicOp};

/// Splits a term into a literal coefficient and the rest of the term.
///
/// `3*x` is `(3, x)`, `2*π*x` is `(2, π*x)`, and any term without a literal coefficient is
/// `(1, term)`. Returns [`None`] for literal numbers, which are folded by other rules.
pub(crate) fn split_coefficient(term: &Expr) -> Option<(i64, Expr)> {
    if term.is_number() {
        return None;
    }

    let Some(factors) = term.flat_operands(VariadicOp::Mul) else {
        return Some((1, term.clone()));
    };
    match factors {
        [first, rest @ ..] if first.is_number() => {
            let coefficient = first.as_number()?;
            let rest = match rest {
                [single] => single.clone(),
                [lhs, rhs] => Expr::binary_raw(BinaryOp::Mul, lhs.clone(), rhs.clone()),
                _ => Expr::variadic_raw(VariadicOp::Mul, rest.to_vec()),
            };
            Some((coefficient, rest))
        },
        _ => Some((1, term.clone())),
    }
}

/// Returns true if `expr` is a literal even integer.
pub(crate) fn is_even(expr: &Expr) -> bool {
    expr.as_number().map_or(false, |n| n % 2 == 0)
}

/// Returns true if `expr` is a literal odd integer.
pub(crate) fn is_odd(expr: &Expr) -> bool {
    expr.as_number().map_or(false, |n| n % 2 != 0)
}

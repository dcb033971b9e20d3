//! Interned expressions: the small-integer table and the named constants.
//!
//! Every integer in `-128..=127` is allocated exactly once, so the results of folding that land in
//! this range share one node, and "is this exactly zero / one / minus one" can be answered by
//! pointer comparison before falling back to value comparison.

use crate::expr::{Constant, Expr, Node};
use once_cell::sync::Lazy;

/// Smallest interned integer.
pub const SMALL_INT_MIN: i64 = -128;

/// Largest interned integer.
pub const SMALL_INT_MAX: i64 = 127;

static SMALL_INTS: Lazy<Vec<Expr>> = Lazy::new(|| {
    (SMALL_INT_MIN..=SMALL_INT_MAX)
        .map(|n| Expr::alloc(Node::Number(n)))
        .collect()
});

pub static PI: Lazy<Expr> = Lazy::new(|| Expr::alloc(Node::Constant(Constant::Pi)));

pub static E: Lazy<Expr> = Lazy::new(|| Expr::alloc(Node::Constant(Constant::E)));

/// The imaginary unit.
pub static I: Lazy<Expr> = Lazy::new(|| Expr::alloc(Node::Constant(Constant::I)));

/// Returns the interned node for `n`, if `n` is in the interned range.
pub fn small_int(n: i64) -> Option<Expr> {
    if (SMALL_INT_MIN..=SMALL_INT_MAX).contains(&n) {
        Some(SMALL_INTS[(n - SMALL_INT_MIN) as usize].clone())
    } else {
        None
    }
}

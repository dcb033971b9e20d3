//! The sort-then-fold pass shared by n-ary addition and multiplication.

use crate::{compare::compare, expr::{Expr, VariadicOp}};
use super::Simplified;

/// Appends `operands` to `out`, splicing in the operands of any nested operation of kind `op`.
fn flatten_into<'a>(op: VariadicOp, operands: impl IntoIterator<Item = &'a Expr>, out: &mut Vec<Expr>) {
    for operand in operands {
        match operand.flat_operands(op) {
            Some(inner) => out.extend(inner.iter().cloned()),
            None => out.push(operand.clone()),
        }
    }
}

/// Sorts `operands` canonically, then folds adjacent pairs with `pair` until no adjacent pair
/// simplifies any more.
///
/// When a pair folds, the result replaces both operands and the pass steps back one position,
/// since the new operand may now fold with its left neighbour. A fold can leave the list out of
/// order, so passes repeat (sorting first) until one completes without folding anything. A rule
/// that only swaps the pair into canonical order does not count as a fold. The loop is iterative,
/// so the number of operands does not affect stack depth.
///
/// Returns [`None`] if the operands were already sorted and nothing folded.
pub fn reduce(
    op: VariadicOp,
    operands: &[Expr],
    pair: fn(&Expr, &Expr) -> Simplified,
) -> Simplified {
    let mut folded = Vec::with_capacity(operands.len());
    flatten_into(op, operands, &mut folded);

    loop {
        folded.sort_by(compare);

        let mut changed = false;
        let mut i = 1;
        while i < folded.len() {
            let Some(merged) = pair(&folded[i - 1], &folded[i])? else {
                i += 1;
                continue;
            };

            let swapped = matches!(
                merged.flat_operands(op),
                Some([lhs, rhs]) if lhs.ptr_eq(&folded[i]) && rhs.ptr_eq(&folded[i - 1])
            );
            if swapped {
                i += 1;
                continue;
            }

            let mut replacement = Vec::new();
            flatten_into(op, [&merged], &mut replacement);
            folded.splice(i - 1..=i, replacement);
            changed = true;
            if i > 1 {
                i -= 1;
            }
        }

        if !changed {
            break;
        }
    }

    // every adjacent pair is now irreducible, so what is left can be assembled directly
    match folded.len() {
        0 => Ok(None),
        1 => Ok(folded.pop()),
        2 => {
            let rhs = folded.pop();
            let lhs = folded.pop();
            Ok(lhs.zip(rhs).map(|(lhs, rhs)| Expr::binary_raw(op.binary(), lhs, rhs)))
        },
        _ if folded.len() == operands.len()
            && folded.iter().zip(operands).all(|(a, b)| a.ptr_eq(b)) => Ok(None),
        _ => Ok(Some(Expr::variadic_raw(op, folded))),
    }
}

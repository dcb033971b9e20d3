//! Rebuilding traversals over expression trees.
//!
//! A [`Transformer`] walks an expression bottom-up. Every hook has a default implementation that
//! transforms the children and calls [`Expr::rebuild`], which returns the original node if no
//! child changed and otherwise reconstructs it through the smart constructors. Implementors
//! override only the hooks for the node kinds they care about.

use crate::{
    error::Error,
    expr::{BinaryOp, Constant, Expr, Node, UnaryOp, VariadicOp},
};
use std::collections::HashMap;

pub trait Transformer {
    /// Transforms an expression by dispatching on its kind.
    fn transform(&mut self, expr: &Expr) -> Result<Expr, Error> {
        match expr.node() {
            Node::Number(n) => self.transform_number(expr, *n),
            Node::Constant(c) => self.transform_constant(expr, *c),
            Node::Variable(name) => self.transform_variable(expr, name),
            Node::Unary(op, operand) => self.transform_unary(expr, *op, operand),
            Node::Binary(op, [lhs, rhs]) => self.transform_binary(expr, *op, lhs, rhs),
            Node::Variadic(op, operands) => self.transform_variadic(expr, *op, operands),
        }
    }

    fn transform_number(&mut self, original: &Expr, _value: i64) -> Result<Expr, Error> {
        Ok(original.clone())
    }

    fn transform_constant(&mut self, original: &Expr, _constant: Constant) -> Result<Expr, Error> {
        Ok(original.clone())
    }

    fn transform_variable(&mut self, original: &Expr, _name: &str) -> Result<Expr, Error> {
        Ok(original.clone())
    }

    fn transform_unary(
        &mut self,
        original: &Expr,
        _op: UnaryOp,
        operand: &Expr,
    ) -> Result<Expr, Error> {
        let operand = self.transform(operand)?;
        original.rebuild(vec![operand])
    }

    fn transform_binary(
        &mut self,
        original: &Expr,
        _op: BinaryOp,
        lhs: &Expr,
        rhs: &Expr,
    ) -> Result<Expr, Error> {
        let lhs = self.transform(lhs)?;
        let rhs = self.transform(rhs)?;
        original.rebuild(vec![lhs, rhs])
    }

    fn transform_variadic(
        &mut self,
        original: &Expr,
        _op: VariadicOp,
        operands: &[Expr],
    ) -> Result<Expr, Error> {
        let operands = operands.iter()
            .map(|operand| self.transform(operand))
            .collect::<Result<Vec<_>, _>>()?;
        original.rebuild(operands)
    }
}

/// Replaces variables by name.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    bindings: &'a HashMap<String, Expr>,
}

impl<'a> Substitution<'a> {
    pub fn new(bindings: &'a HashMap<String, Expr>) -> Self {
        Self { bindings }
    }
}

impl Transformer for Substitution<'_> {
    fn transform_variable(&mut self, original: &Expr, name: &str) -> Result<Expr, Error> {
        Ok(self.bindings.get(name).cloned().unwrap_or_else(|| original.clone()))
    }
}

impl Expr {
    /// Replaces every variable named in `bindings` with its bound expression, re-simplifying
    /// each node whose children changed.
    ///
    /// Subtrees that mention none of the bound names are returned as the same nodes, without
    /// allocating.
    pub fn substitute(&self, bindings: &HashMap<String, Expr>) -> Result<Expr, Error> {
        Substitution::new(bindings).transform(self)
    }
}

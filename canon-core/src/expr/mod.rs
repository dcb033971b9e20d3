//! The expression tree.
//!
//! An [`Expr`] is a cheap, reference-counted handle to an immutable [`Node`]. Expressions are only
//! ever created through the smart constructors in this module and in [`build`], which run the
//! rewrite rules before allocating anything. As a result, every expression that exists is already
//! in canonical form:
//!
//! - integers in `-128..=127` are interned (see [`crate::consts`]),
//! - operations over two literal integers for `+`, `-` and `*` are always folded,
//! - the operands of commutative operations are sorted with [`crate::compare::compare`],
//! - variadic additions and multiplications hold at least three operands and never directly
//!   contain an operation of the same kind.
//!
//! Equality is structural. Two handles pointing at the same node compare equal without walking
//! the tree, which makes comparisons against shared subexpressions and interned integers cheap.

pub mod build;
mod decimal;
mod fmt;
mod iter;
mod ops;

pub use iter::ExprIter;

use crate::{consts, error::Error};
use std::{collections::BTreeSet, fmt as std_fmt, slice, sync::Arc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Constant {
    /// The ratio of a circle's circumference to its diameter.
    Pi,

    /// Euler's number.
    E,

    /// The imaginary unit.
    I,
}

impl Constant {
    /// Returns the symbol used to display this constant.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
            Self::I => "i",
        }
    }

    /// Returns a floating-point approximation of the constant, if it is real.
    pub fn approximation(self) -> Option<f64> {
        match self {
            Self::Pi => Some(std::f64::consts::PI),
            Self::E => Some(std::f64::consts::E),
            Self::I => None,
        }
    }

    /// Fixed rank used to break ties between constants with equal approximations.
    pub fn rank(self) -> u8 {
        match self {
            Self::I => 0,
            Self::Pi => 1,
            Self::E => 2,
        }
    }
}

impl std_fmt::Display for Constant {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An operator taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum UnaryOp {
    Neg,
    Abs,
    Sin,
    Cos,
    Tan,
    Ln,
}

impl UnaryOp {
    /// Returns the name of the operator, as written in function-call form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Neg => "neg",
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
        }
    }
}

/// An operator taking two ordered operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    /// `root(x, n)`, the `n`-th root of `x`.
    Root,
}

impl BinaryOp {
    /// Returns true if the order of the operands does not matter.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns the infix symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Root => "root",
        }
    }
}

/// An associative, commutative operator that can hold any number of operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum VariadicOp {
    Add,
    Mul,
}

impl VariadicOp {
    /// Returns the two-operand form of this operator.
    pub fn binary(self) -> BinaryOp {
        match self {
            Self::Add => BinaryOp::Add,
            Self::Mul => BinaryOp::Mul,
        }
    }
}

/// The kind of an expression, used for cheap dispatch and for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Number,
    Constant,
    Variable,
    Unary,
    Binary,
    Variadic,
}

impl std_fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        let name = match self {
            Self::Number => "a number",
            Self::Constant => "a constant",
            Self::Variable => "a variable",
            Self::Unary => "a unary",
            Self::Binary => "a binary",
            Self::Variadic => "a variadic",
        };
        f.write_str(name)
    }
}

/// The payload of an expression.
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Node {
    Number(i64),
    Constant(Constant),
    Variable(Box<str>),
    Unary(UnaryOp, Expr),
    Binary(BinaryOp, [Expr; 2]),
    Variadic(VariadicOp, Box<[Expr]>),
}

/// A handle to an immutable, canonical expression tree.
///
/// Cloning an [`Expr`] is cheap: it only bumps a reference count.
#[derive(Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Expr(Arc<Node>);

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl std_fmt::Debug for Expr {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        self.0.fmt(f)
    }
}

impl Expr {
    /// Allocates a node without interning or simplification.
    pub(crate) fn alloc(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// Builds a unary node as-is. The caller is responsible for it being canonical.
    pub(crate) fn unary_raw(op: UnaryOp, operand: Expr) -> Self {
        Self::alloc(Node::Unary(op, operand))
    }

    /// Builds a binary node as-is. The caller is responsible for it being canonical.
    pub(crate) fn binary_raw(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::alloc(Node::Binary(op, [lhs, rhs]))
    }

    /// Builds a variadic node as-is. The caller is responsible for it being canonical.
    pub(crate) fn variadic_raw(op: VariadicOp, operands: Vec<Expr>) -> Self {
        Self::alloc(Node::Variadic(op, operands.into_boxed_slice()))
    }

    /// Creates a number. Integers in `-128..=127` come from the intern table.
    pub fn number(value: i64) -> Self {
        consts::small_int(value).unwrap_or_else(|| Self::alloc(Node::Number(value)))
    }

    /// Creates a variable with the given name.
    pub fn variable(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument("variable names cannot be empty"));
        }
        Ok(Self::alloc(Node::Variable(name.into_boxed_str())))
    }

    /// The interned zero.
    pub fn zero() -> Self {
        Self::number(0)
    }

    /// The interned one.
    pub fn one() -> Self {
        Self::number(1)
    }

    /// The interned minus one.
    pub fn minus_one() -> Self {
        Self::number(-1)
    }

    pub fn pi() -> Self {
        consts::PI.clone()
    }

    pub fn e() -> Self {
        consts::E.clone()
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        consts::I.clone()
    }

    /// Returns the payload of this expression.
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn kind(&self) -> ExprKind {
        match self.node() {
            Node::Number(_) => ExprKind::Number,
            Node::Constant(_) => ExprKind::Constant,
            Node::Variable(_) => ExprKind::Variable,
            Node::Unary(..) => ExprKind::Unary,
            Node::Binary(..) => ExprKind::Binary,
            Node::Variadic(..) => ExprKind::Variadic,
        }
    }

    /// The rank used by the canonical comparator: number < constant < variable < unary <
    /// addition < subtraction < multiplication < division < root < power.
    pub fn sort_rank(&self) -> u8 {
        match self.node() {
            Node::Number(_) => 0,
            Node::Constant(_) => 1,
            Node::Variable(_) => 2,
            Node::Unary(..) => 3,
            Node::Binary(BinaryOp::Add, _) | Node::Variadic(VariadicOp::Add, _) => 4,
            Node::Binary(BinaryOp::Sub, _) => 5,
            Node::Binary(BinaryOp::Mul, _) | Node::Variadic(VariadicOp::Mul, _) => 6,
            Node::Binary(BinaryOp::Div, _) => 7,
            Node::Binary(BinaryOp::Root, _) => 8,
            Node::Binary(BinaryOp::Pow, _) => 9,
        }
    }

    /// Returns the direct children of this expression, in order.
    pub fn children(&self) -> &[Expr] {
        match self.node() {
            Node::Unary(_, operand) => slice::from_ref(operand),
            Node::Binary(_, operands) => operands,
            Node::Variadic(_, operands) => operands,
            Node::Number(_) | Node::Constant(_) | Node::Variable(_) => &[],
        }
    }

    /// Returns an iterator that visits every subexpression in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the names of every variable in this expression.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(|expr| expr.as_variable())
            .collect()
    }

    /// Rebuilds this expression with new children.
    ///
    /// If every child is the same node as the current one, `self` is returned without
    /// allocating. Otherwise the expression is reconstructed through the smart constructors, so
    /// the result is simplified again.
    pub fn rebuild(&self, children: Vec<Expr>) -> Result<Expr, Error> {
        let current = self.children();
        if children.len() != current.len() {
            return Err(Error::InvalidArgument("wrong number of children for rebuild"));
        }
        if children.iter().zip(current).all(|(new, old)| new.ptr_eq(old)) {
            return Ok(self.clone());
        }

        match self.node() {
            Node::Unary(op, _) => build::unary(*op, &children[0]),
            Node::Binary(op, _) => build::binary(*op, &children[0], &children[1]),
            Node::Variadic(op, _) => build::variadic(*op, children),
            Node::Number(_) | Node::Constant(_) | Node::Variable(_) => Ok(self.clone()),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.node() {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<Constant> {
        match self.node() {
            Node::Constant(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self.node() {
            Node::Variable(name) => Some(name.as_ref()),
            _ => None,
        }
    }

    /// Returns the operand if this is a unary operation with the given operator.
    pub fn as_unary(&self, op: UnaryOp) -> Option<&Expr> {
        match self.node() {
            Node::Unary(found, operand) if *found == op => Some(operand),
            _ => None,
        }
    }

    /// Returns the operands if this is a binary operation with the given operator.
    pub fn as_binary(&self, op: BinaryOp) -> Option<(&Expr, &Expr)> {
        match self.node() {
            Node::Binary(found, [lhs, rhs]) if *found == op => Some((lhs, rhs)),
            _ => None,
        }
    }

    pub fn as_negation(&self) -> Option<&Expr> {
        self.as_unary(UnaryOp::Neg)
    }

    pub fn as_division(&self) -> Option<(&Expr, &Expr)> {
        self.as_binary(BinaryOp::Div)
    }

    pub fn as_subtraction(&self) -> Option<(&Expr, &Expr)> {
        self.as_binary(BinaryOp::Sub)
    }

    /// Returns the base and exponent of a power.
    pub fn as_power(&self) -> Option<(&Expr, &Expr)> {
        self.as_binary(BinaryOp::Pow)
    }

    /// Returns the radicand and index of a root.
    pub fn as_root(&self) -> Option<(&Expr, &Expr)> {
        self.as_binary(BinaryOp::Root)
    }

    /// Returns the operands of an addition or multiplication, whether it is binary or variadic.
    pub fn flat_operands(&self, op: VariadicOp) -> Option<&[Expr]> {
        match self.node() {
            Node::Binary(found, operands) if *found == op.binary() => Some(operands),
            Node::Variadic(found, operands) if *found == op => Some(operands),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self.node(), Node::Number(_))
    }

    pub fn is_zero(&self) -> bool {
        self.as_number() == Some(0)
    }

    pub fn is_one(&self) -> bool {
        self.as_number() == Some(1)
    }

    pub fn is_minus_one(&self) -> bool {
        self.as_number() == Some(-1)
    }

    pub fn is_addition(&self) -> bool {
        self.flat_operands(VariadicOp::Add).is_some()
    }

    pub fn is_multiplication(&self) -> bool {
        self.flat_operands(VariadicOp::Mul).is_some()
    }

    /// Returns the value of a number.
    pub fn value(&self) -> Result<i64, Error> {
        self.as_number().ok_or_else(|| self.accessor_error(ExprKind::Number))
    }

    /// Returns the operand of a unary operation.
    pub fn operand(&self) -> Result<&Expr, Error> {
        match self.node() {
            Node::Unary(_, operand) => Ok(operand),
            _ => Err(self.accessor_error(ExprKind::Unary)),
        }
    }

    /// Returns the two operands of a binary operation.
    pub fn operands(&self) -> Result<(&Expr, &Expr), Error> {
        match self.node() {
            Node::Binary(_, [lhs, rhs]) => Ok((lhs, rhs)),
            _ => Err(self.accessor_error(ExprKind::Binary)),
        }
    }

    /// Returns the operands of a variadic operation.
    pub fn terms(&self) -> Result<&[Expr], Error> {
        match self.node() {
            Node::Variadic(_, operands) => Ok(operands),
            _ => Err(self.accessor_error(ExprKind::Variadic)),
        }
    }

    fn accessor_error(&self, expected: ExprKind) -> Error {
        Error::InvalidAccessor { expected, found: self.kind() }
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
    fn small_numbers_are_interned() {
        for n in -128..=127 {
            assert!(Expr::number(n).ptr_eq(&Expr::number(n)), "{} is not interned", n);
        }
    }

    #[test]
    fn large_numbers_are_not_interned() {
        for n in [128, -129, 1 << 40] {
            let (a, b) = (Expr::number(n), Expr::number(n));
            assert!(!a.ptr_eq(&b));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn constants_are_shared() {
        assert!(Expr::pi().ptr_eq(&Expr::pi()));
        assert!(Expr::i().ptr_eq(&Expr::i()));
        assert_eq!(Expr::e().as_constant(), Some(Constant::E));
    }

    #[test]
    fn constant_approximations() {
        use assert_float_eq::*;

        assert_float_absolute_eq!(Constant::Pi.approximation().unwrap(), 3.14159, 1e-5);
        assert_float_absolute_eq!(Constant::E.approximation().unwrap(), 2.71828, 1e-5);
        assert_eq!(Constant::I.approximation(), None);
    }

    #[test]
    fn empty_variable_name() {
        assert_eq!(
            Expr::variable(""),
            Err(Error::InvalidArgument("variable names cannot be empty")),
        );
    }

    #[test]
    fn equality_is_structural() {
        let (x, y) = (var("x"), var("y"));
        assert_eq!(var("x"), x);
        assert_ne!(x, y);

        // built twice, allocated twice, still equal
        let a = Expr::binary_raw(BinaryOp::Root, x.clone(), Expr::number(300));
        let b = Expr::binary_raw(BinaryOp::Root, var("x"), Expr::number(300));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn checked_accessors() {
        let x = var("x");
        let neg = Expr::unary_raw(UnaryOp::Neg, x.clone());

        assert_eq!(Expr::number(5).value(), Ok(5));
        assert_eq!(neg.operand(), Ok(&x));
        assert_eq!(
            x.value(),
            Err(Error::InvalidAccessor { expected: ExprKind::Number, found: ExprKind::Variable }),
        );
        assert_eq!(
            neg.operands(),
            Err(Error::InvalidAccessor { expected: ExprKind::Binary, found: ExprKind::Unary }),
        );
        assert_eq!(
            Expr::pi().terms(),
            Err(Error::InvalidAccessor { expected: ExprKind::Variadic, found: ExprKind::Constant }),
        );
    }

    #[test]
    fn sort_ranks() {
        let x = var("x");
        let two = Expr::number(2);
        let ranked = [
            (Expr::number(3), 0),
            (Expr::pi(), 1),
            (x.clone(), 2),
            (Expr::unary_raw(UnaryOp::Sin, x.clone()), 3),
            (Expr::binary_raw(BinaryOp::Add, two.clone(), x.clone()), 4),
            (Expr::binary_raw(BinaryOp::Sub, x.clone(), two.clone()), 5),
            (Expr::binary_raw(BinaryOp::Mul, two.clone(), x.clone()), 6),
            (Expr::binary_raw(BinaryOp::Div, x.clone(), two.clone()), 7),
            (Expr::binary_raw(BinaryOp::Root, x.clone(), two.clone()), 8),
            (Expr::binary_raw(BinaryOp::Pow, x.clone(), two.clone()), 9),
        ];

        for (expr, rank) in ranked {
            assert_eq!(expr.sort_rank(), rank, "{:?}", expr);
        }
    }

    #[test]
    fn rebuild_unchanged_children_is_free() {
        let (x, y) = (var("x"), var("y"));
        let sum = Expr::binary_raw(BinaryOp::Add, x.clone(), y.clone());
        let rebuilt = sum.rebuild(vec![x, y]).unwrap();
        assert!(rebuilt.ptr_eq(&sum));
    }

    #[test]
    fn rebuild_simplifies() {
        let x = var("x");
        let sum = Expr::binary_raw(BinaryOp::Add, Expr::number(2), x);
        let rebuilt = sum.rebuild(vec![Expr::number(2), Expr::number(3)]).unwrap();
        assert_eq!(rebuilt, Expr::number(5));
    }

    #[test]
    fn rebuild_wrong_arity() {
        let neg = Expr::unary_raw(UnaryOp::Neg, var("x"));
        assert!(matches!(neg.rebuild(vec![]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn free_variables() {
        let (x, y, z) = (var("x"), var("y"), var("z"));
        let expr = Expr::binary_raw(
            BinaryOp::Mul,
            Expr::unary_raw(UnaryOp::Sin, y.clone()),
            Expr::variadic_raw(VariadicOp::Add, vec![Expr::pi(), x, y, z]),
        );
        assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }
}

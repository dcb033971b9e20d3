//! Text rendering of expressions.

use super::{BinaryOp, Expr, Node, UnaryOp, VariadicOp};
use std::fmt::{self, Display, Formatter};

/// How tightly an expression binds when rendered, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Term,
    Factor,
    Neg,
    Exp,
    Atom,
}

/// Returns the glyph used to render a root with the given index, if it has one.
fn root_glyph(index: &Expr) -> Option<char> {
    match index.as_number()? {
        2 => Some('√'),
        3 => Some('∛'),
        4 => Some('∜'),
        _ => None,
    }
}

impl Expr {
    fn precedence(&self) -> Precedence {
        match self.node() {
            Node::Number(n) if *n < 0 => Precedence::Neg,
            Node::Number(_) | Node::Constant(_) | Node::Variable(_) => Precedence::Atom,
            Node::Unary(UnaryOp::Neg, _) => Precedence::Neg,
            Node::Unary(..) => Precedence::Atom,
            Node::Binary(BinaryOp::Add | BinaryOp::Sub, _) | Node::Variadic(VariadicOp::Add, _) => {
                Precedence::Term
            },
            Node::Binary(BinaryOp::Mul | BinaryOp::Div, _) | Node::Variadic(VariadicOp::Mul, _) => {
                Precedence::Factor
            },
            Node::Binary(BinaryOp::Pow, _) => Precedence::Exp,
            Node::Binary(BinaryOp::Root, [_, index]) => match root_glyph(index) {
                Some(_) => Precedence::Exp,
                None => Precedence::Atom,
            },
        }
    }
}

/// Writes `expr`, wrapped in parentheses if `parenthesize` is true.
fn write_child(f: &mut Formatter<'_>, expr: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Returns true if the left operand of an infix operator of precedence `parent` needs
/// parentheses.
fn left_needs_parens(child: &Expr, parent: Precedence) -> bool {
    child.precedence() < parent
}

/// Returns true if the right operand of an infix operator of precedence `parent` needs
/// parentheses. Operators of equal precedence on the right are always wrapped, so `a - (b - c)`
/// and `a / (b * c)` keep their meaning.
fn right_needs_parens(child: &Expr, parent: Precedence) -> bool {
    let precedence = child.precedence();
    precedence <= parent || precedence == Precedence::Neg
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Number(n) => write!(f, "{}", n),
            Node::Constant(c) => write!(f, "{}", c),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Unary(UnaryOp::Neg, operand) => {
                write!(f, "-")?;
                write_child(f, operand, operand.precedence() <= Precedence::Neg)
            },
            Node::Unary(UnaryOp::Abs, operand) => write!(f, "|{}|", operand),
            Node::Unary(op, operand) => write!(f, "{}({})", op.name(), operand),
            Node::Binary(BinaryOp::Pow, [base, exponent]) => {
                write_child(f, base, base.precedence() <= Precedence::Exp)?;
                write!(f, "^")?;
                write_child(f, exponent, exponent.precedence() < Precedence::Exp)
            },
            Node::Binary(BinaryOp::Root, [radicand, index]) => match root_glyph(index) {
                Some(glyph) => {
                    write!(f, "{}", glyph)?;
                    write_child(f, radicand, radicand.precedence() < Precedence::Atom)
                },
                None => write!(f, "root({}, {})", radicand, index),
            },
            Node::Binary(op, [lhs, rhs]) => {
                let precedence = self.precedence();
                write_child(f, lhs, left_needs_parens(lhs, precedence))?;
                write!(f, " {} ", op.symbol())?;
                write_child(f, rhs, right_needs_parens(rhs, precedence))
            },
            Node::Variadic(op, operands) => {
                let precedence = self.precedence();
                let mut iter = operands.iter();
                if let Some(first) = iter.next() {
                    write_child(f, first, left_needs_parens(first, precedence))?;
                    for operand in iter {
                        write!(f, " {} ", op.binary().symbol())?;
                        write_child(f, operand, right_needs_parens(operand, precedence))?;
                    }
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    fn n(value: i64) -> Expr {
        Expr::number(value)
    }

    #[test]
    fn leaves() {
        assert_eq!(n(-42).to_string(), "-42");
        assert_eq!(Expr::pi().to_string(), "π");
        assert_eq!(Expr::i().to_string(), "i");
        assert_eq!(var("theta").to_string(), "theta");
    }

    #[test]
    fn infix_operators() {
        let (x, y, z) = (var("x"), var("y"), var("z"));
        assert_eq!(x.try_add(&n(2)).unwrap().to_string(), "2 + x");
        assert_eq!(Expr::sum(vec![x.clone(), y.clone(), z.clone()]).unwrap().to_string(), "x + y + z");
        assert_eq!(x.try_add(&x).unwrap().try_add(&y.try_mul(&n(2)).unwrap()).unwrap().to_string(), "2 * x + 2 * y");
        assert_eq!(x.try_sub(&y.try_sub(&z).unwrap()).unwrap().to_string(), "x - (y - z)");
        assert_eq!(x.try_div(&y.try_mul(&z).unwrap()).unwrap().to_string(), "x / (y * z)");
        assert_eq!(x.try_add(&y).unwrap().try_mul(&z).unwrap().to_string(), "z * (x + y)");
    }

    #[test]
    fn powers() {
        let (x, y) = (var("x"), var("y"));
        assert_eq!(x.try_pow(&n(2)).unwrap().to_string(), "x^2");
        assert_eq!(x.try_pow(&n(-1)).unwrap().to_string(), "x^(-1)");
        assert_eq!(x.try_pow(&n(2).try_mul(&y).unwrap()).unwrap().to_string(), "x^(2 * y)");
        assert_eq!(n(-2).try_pow(&n(65)).unwrap().to_string(), "(-2)^65");
        assert_eq!(x.try_pow(&y.try_pow(&y).unwrap()).unwrap().to_string(), "x^y^y");
    }

    #[test]
    fn unary_operators() {
        let (x, y) = (var("x"), var("y"));
        assert_eq!(x.try_neg().unwrap().to_string(), "-x");
        assert_eq!(x.try_add(&y).unwrap().try_neg().unwrap().to_string(), "-(x + y)");
        assert_eq!(x.try_abs().unwrap().to_string(), "|x|");
        assert_eq!(crate::expr::build::unary(UnaryOp::Sin, &x).unwrap().to_string(), "sin(x)");
    }

    #[test]
    fn roots() {
        let x = var("x");
        assert_eq!(n(2).try_root(&n(2)).unwrap().to_string(), "√2");
        assert_eq!(n(12).try_root(&n(2)).unwrap().to_string(), "2 * √3");
        assert_eq!(x.try_add(&n(1)).unwrap().try_root(&n(3)).unwrap().to_string(), "∛(1 + x)");
        assert_eq!(x.try_root(&n(4)).unwrap().to_string(), "∜x");
        assert_eq!(x.try_root(&n(5)).unwrap().to_string(), "root(x, 5)");
        assert_eq!(x.try_root(&n(2)).unwrap().try_pow(&var("y")).unwrap().to_string(), "(√x)^y");
    }

    #[test]
    fn exact_trigonometry() {
        let angle = Expr::pi().try_div(&n(4)).unwrap();
        let sine = crate::expr::build::unary(UnaryOp::Sin, &angle).unwrap();
        assert_eq!(sine.to_string(), "√2 / 2");
    }
}

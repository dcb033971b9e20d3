//! Relations between expressions.
//!
//! Comparing two expressions does not produce a boolean. It produces an [`Equation`] that pairs a
//! [`ComparisonOperator`] with both sides, and equations combine into an [`EquationSystem`] that
//! describes an intersection or union of regions.

use crate::{error::Error, expr::Expr};
use std::{collections::HashMap, fmt, ops::{BitAnd, BitOr, Not}};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A comparison operator.
///
/// Every operator sits next to its negation, so the discriminants of an operator and its
/// negation differ only in the lowest bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum ComparisonOperator {
    EqualTo = 0,
    NotEqualTo = 1,
    LessThan = 2,
    GreaterThanOrEqualTo = 3,
    GreaterThan = 4,
    LessThanOrEqualTo = 5,
}

impl ComparisonOperator {
    /// All operators, in discriminant order.
    pub const ALL: [Self; 6] = [
        Self::EqualTo,
        Self::NotEqualTo,
        Self::LessThan,
        Self::GreaterThanOrEqualTo,
        Self::GreaterThan,
        Self::LessThanOrEqualTo,
    ];

    /// Returns the operator that holds exactly when this one does not.
    pub fn negate(self) -> Self {
        Self::ALL[(self as usize) ^ 1]
    }

    /// Returns the symbol used to display this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::EqualTo => "=",
            Self::NotEqualTo => "≠",
            Self::LessThan => "<",
            Self::GreaterThanOrEqualTo => "≥",
            Self::GreaterThan => ">",
            Self::LessThanOrEqualTo => "≤",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A comparison between two expressions, such as `x ≤ 2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Equation {
    pub op: ComparisonOperator,
    pub lhs: Expr,
    pub rhs: Expr,
}

impl Equation {
    pub fn new(op: ComparisonOperator, lhs: Expr, rhs: Expr) -> Self {
        Self { op, lhs, rhs }
    }

    /// Substitutes variables on both sides of the equation.
    pub fn substitute(&self, bindings: &HashMap<String, Expr>) -> Result<Self, Error> {
        Ok(Self {
            op: self.op,
            lhs: self.lhs.substitute(bindings)?,
            rhs: self.rhs.substitute(bindings)?,
        })
    }
}

impl Not for Equation {
    type Output = Self;

    fn not(self) -> Self {
        Self { op: self.op.negate(), ..self }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// A boolean combination of equations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EquationSystem {
    /// A single equation.
    Identity(Equation),

    /// Every member holds.
    Intersection(Vec<EquationSystem>),

    /// At least one member holds.
    Union(Vec<EquationSystem>),
}

impl EquationSystem {
    /// Combines two systems so that both must hold.
    ///
    /// Intersections are flattened, so `(a ∧ b) ∧ c` is the same system as `a ∧ b ∧ c`.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Intersection(mut lhs), Self::Intersection(rhs)) => {
                lhs.extend(rhs);
                Self::Intersection(lhs)
            },
            (Self::Intersection(mut lhs), other) => {
                lhs.push(other);
                Self::Intersection(lhs)
            },
            (this, Self::Intersection(rhs)) => {
                let mut members = Vec::with_capacity(rhs.len() + 1);
                members.push(this);
                members.extend(rhs);
                Self::Intersection(members)
            },
            (this, other) => Self::Intersection(vec![this, other]),
        }
    }

    /// Combines two systems so that at least one must hold.
    ///
    /// Unions are flattened, so `(a ∨ b) ∨ c` is the same system as `a ∨ b ∨ c`.
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Union(mut lhs), Self::Union(rhs)) => {
                lhs.extend(rhs);
                Self::Union(lhs)
            },
            (Self::Union(mut lhs), other) => {
                lhs.push(other);
                Self::Union(lhs)
            },
            (this, Self::Union(rhs)) => {
                let mut members = Vec::with_capacity(rhs.len() + 1);
                members.push(this);
                members.extend(rhs);
                Self::Union(members)
            },
            (this, other) => Self::Union(vec![this, other]),
        }
    }

    /// Substitutes variables in every equation of the system.
    pub fn substitute(&self, bindings: &HashMap<String, Expr>) -> Result<Self, Error> {
        let substitute_all = |members: &[EquationSystem]| {
            members.iter()
                .map(|member| member.substitute(bindings))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(match self {
            Self::Identity(equation) => Self::Identity(equation.substitute(bindings)?),
            Self::Intersection(members) => Self::Intersection(substitute_all(members)?),
            Self::Union(members) => Self::Union(substitute_all(members)?),
        })
    }

    /// Writes a member, parenthesizing it if it is a combination of the other kind.
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>, parent_is_intersection: bool) -> fmt::Result {
        match (self, parent_is_intersection) {
            (Self::Union(_), true) | (Self::Intersection(_), false) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl From<Equation> for EquationSystem {
    fn from(equation: Equation) -> Self {
        Self::Identity(equation)
    }
}

impl BitAnd for EquationSystem {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitOr for EquationSystem {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl fmt::Display for EquationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (members, separator, is_intersection) = match self {
            Self::Identity(equation) => return write!(f, "{}", equation),
            Self::Intersection(members) => (members, " ∧ ", true),
            Self::Union(members) => (members, " ∨ ", false),
        };

        let mut iter = members.iter();
        if let Some(first) = iter.next() {
            first.fmt_member(f, is_intersection)?;
            for member in iter {
                f.write_str(separator)?;
                member.fmt_member(f, is_intersection)?;
            }
        }
        Ok(())
    }
}

impl Expr {
    fn compare_with(&self, op: ComparisonOperator, rhs: &Expr) -> Equation {
        Equation::new(op, self.clone(), rhs.clone())
    }

    /// Builds the equation `self = rhs`.
    pub fn equal_to(&self, rhs: &Expr) -> Equation {
        self.compare_with(ComparisonOperator::EqualTo, rhs)
    }

    /// Builds the equation `self ≠ rhs`.
    pub fn not_equal_to(&self, rhs: &Expr) -> Equation {
        self.compare_with(ComparisonOperator::NotEqualTo, rhs)
    }

    /// Builds the inequality `self < rhs`.
    pub fn less_than(&self, rhs: &Expr) -> Equation {
        self.compare_with(ComparisonOperator::LessThan, rhs)
    }

    /// Builds the inequality `self ≤ rhs`.
    pub fn less_or_equal(&self, rhs: &Expr) -> Equation {
        self.compare_with(ComparisonOperator::LessThanOrEqualTo, rhs)
    }

    /// Builds the inequality `self > rhs`.
    pub fn greater_than(&self, rhs: &Expr) -> Equation {
        self.compare_with(ComparisonOperator::GreaterThan, rhs)
    }

    /// Builds the inequality `self ≥ rhs`.
    pub fn greater_or_equal(&self, rhs: &Expr) -> Equation {
        self.compare_with(ComparisonOperator::GreaterThanOrEqualTo, rhs)
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
    fn negation_pairs() {
        use ComparisonOperator::*;
        let pairs = [
            (EqualTo, NotEqualTo),
            (LessThan, GreaterThanOrEqualTo),
            (GreaterThan, LessThanOrEqualTo),
        ];
        for (op, negated) in pairs {
            assert_eq!(op.negate(), negated);
            assert_eq!(negated.negate(), op);
        }
    }

    #[test]
    fn not_flips_the_operator() {
        let (x, y) = (var("x"), var("y"));
        let eq = x.less_than(&y);
        assert_eq!(!eq, x.greater_or_equal(&y));
    }

    #[test]
    fn systems_flatten() {
        let (x, y) = (var("x"), var("y"));
        let a = EquationSystem::from(x.greater_than(&Expr::zero()));
        let b = EquationSystem::from(y.greater_than(&Expr::zero()));
        let c = EquationSystem::from(x.less_than(&y));

        let left = (a.clone() & b.clone()) & c.clone();
        let right = a.clone() & (b.clone() & c.clone());
        assert_eq!(left, right);
        assert_eq!(left, EquationSystem::Intersection(vec![a.clone(), b.clone(), c.clone()]));

        let mixed = (a.clone() | b.clone()) & c.clone();
        assert_eq!(mixed, EquationSystem::Intersection(vec![EquationSystem::Union(vec![a, b]), c]));
    }

    #[test]
    fn display() {
        let (x, y) = (var("x"), var("y"));
        let a = EquationSystem::from(x.less_or_equal(&Expr::number(2)));
        let b = EquationSystem::from(y.not_equal_to(&x));
        let c = EquationSystem::from(x.equal_to(&Expr::pi()));

        assert_eq!(a.to_string(), "x ≤ 2");
        assert_eq!((a.clone() | b.clone()).to_string(), "x ≤ 2 ∨ y ≠ x");
        assert_eq!(((a | b) & c).to_string(), "(x ≤ 2 ∨ y ≠ x) ∧ x = π");
    }

    #[test]
    fn substitution() {
        let x = var("x");
        let system = EquationSystem::from(x.try_add(&x).unwrap().greater_than(&Expr::number(4)));
        let bindings = HashMap::from([("x".to_string(), Expr::number(3))]);
        let expected = EquationSystem::from(Expr::number(6).greater_than(&Expr::number(4)));
        assert_eq!(system.substitute(&bindings), Ok(expected));
    }
}

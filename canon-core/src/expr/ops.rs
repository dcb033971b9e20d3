//! Arithmetic operator traits and integer conversions for [`Expr`].
//!
//! The operators are shorthand for the `try_*` smart constructors. Like integer division in
//! `std`, they panic where the checked form would return an error.

use crate::error::Error;
use super::Expr;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Implements a binary operator for every combination of owned and borrowed [`Expr`], and for
/// mixing an [`Expr`] with an `i64`.
macro_rules! binary_operator {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Expr> for &Expr {
            type Output = Expr;

            /// # Panics
            ///
            /// Panics if the checked operation returns an error, such as dividing by the literal
            /// zero or overflowing while folding integers.
            fn $method(self, rhs: &Expr) -> Expr {
                match self.$checked(rhs) {
                    Ok(expr) => expr,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl $trait<Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<Expr> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                $trait::$method(self, &rhs)
            }
        }

        impl $trait<i64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: i64) -> Expr {
                $trait::$method(&self, &Expr::number(rhs))
            }
        }

        impl $trait<i64> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: i64) -> Expr {
                $trait::$method(self, &Expr::number(rhs))
            }
        }

        impl $trait<Expr> for i64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                $trait::$method(&Expr::number(self), &rhs)
            }
        }

        impl $trait<&Expr> for i64 {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                $trait::$method(&Expr::number(self), rhs)
            }
        }
    };
}

binary_operator!(Add, add, try_add);
binary_operator!(Sub, sub, try_sub);
binary_operator!(Mul, mul, try_mul);
binary_operator!(Div, div, try_div);

impl Neg for &Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if negating a literal overflows, which only happens for `i64::MIN`.
    fn neg(self) -> Expr {
        match self.try_neg() {
            Ok(expr) => expr,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        -&self
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Expr::number(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Expr {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Expr::number)
            .map_err(|_| Error::Overflow)
    }
}

impl TryFrom<usize> for Expr {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Expr::number)
            .map_err(|_| Error::Overflow)
    }
}

//! Exact conversion of decimal literals into fractions.
//!
//! A decimal such as `-3.25e-1` is decomposed into a sign, an integer mantissa (`325`) and a
//! power-of-ten scale (`3`), then built as `mantissa / 10^scale` so the division rules reduce it
//! to lowest terms.

use crate::{arith::checked_pow, error::Error};
use super::Expr;

/// Largest power of ten that fits an `i64`.
const MAX_SCALE: i64 = 18;

impl Expr {
    /// Parses a decimal literal into an exact rational expression.
    ///
    /// The accepted syntax is an optional sign, one or more digits with an optional fraction
    /// part, then an optional exponent such as `e3` or `E-2`. `0.25` becomes `1/4` and `1.625`
    /// becomes `1 + 5/8`.
    ///
    /// Returns [`Error::InvalidArgument`] for malformed input and [`Error::Overflow`] if the
    /// mantissa or the scale does not fit an `i64`.
    pub fn from_decimal_str(literal: &str) -> Result<Self, Error> {
        let (negative, unsigned) = match literal.as_bytes().first() {
            Some(b'-') => (true, &literal[1..]),
            Some(b'+') => (false, &literal[1..]),
            _ => (false, literal),
        };

        let (number, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(index) => {
                let exponent = unsigned[index + 1..]
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidArgument("malformed decimal exponent"))?;
                (&unsigned[..index], exponent)
            },
            None => (unsigned, 0),
        };

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(Error::InvalidArgument("decimal literal has no digits"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidArgument("decimal literal contains a non-digit"));
        }

        let mut mantissa: i64 = 0;
        for digit in whole.bytes().chain(fraction.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(digit - b'0')))
                .ok_or(Error::Overflow)?;
        }
        if negative {
            mantissa = -mantissa;
        }

        // the literal is `mantissa * 10^-scale`
        let scale = (fraction.len() as i64)
            .checked_sub(exponent)
            .ok_or(Error::Overflow)?;
        if scale.abs() > MAX_SCALE {
            return Err(Error::Overflow);
        }

        let power = Expr::number(checked_pow(10, scale.unsigned_abs())?);
        if scale >= 0 {
            Expr::number(mantissa).try_div(&power)
        } else {
            Expr::number(mantissa).try_mul(&power)
        }
    }
}

impl TryFrom<f64> for Expr {
    type Error = Error;

    /// Converts a float exactly, through its shortest round-trip decimal form.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument("cannot convert a non-finite float"));
        }
        Expr::from_decimal_str(&format!("{}", value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::fraction::ratio;
    use super::*;

    #[test]
    fn fractions_reduce() {
        assert_eq!(Expr::from_decimal_str("0.1"), ratio(1, 10));
        assert_eq!(Expr::from_decimal_str("0.25"), ratio(1, 4));
        assert_eq!(Expr::from_decimal_str("0.08"), ratio(2, 25));
        assert_eq!(Expr::from_decimal_str("3.14159"), ratio(314159, 100000));
        assert_eq!(Expr::from_decimal_str("1.625"), ratio(13, 8));
        assert_eq!(Expr::from_decimal_str("-2.5"), ratio(-5, 2));
    }

    #[test]
    fn integers_and_exponents() {
        assert_eq!(Expr::from_decimal_str("42"), Ok(Expr::number(42)));
        assert_eq!(Expr::from_decimal_str("4.000"), Ok(Expr::number(4)));
        assert_eq!(Expr::from_decimal_str("1.5e3"), Ok(Expr::number(1500)));
        assert_eq!(Expr::from_decimal_str("25E-2"), ratio(1, 4));
        assert_eq!(Expr::from_decimal_str(".5"), ratio(1, 2));
    }

    #[test]
    fn malformed() {
        for literal in ["", "-", ".", "1.2.3", "abc", "1e", "1ex"] {
            assert!(
                matches!(Expr::from_decimal_str(literal), Err(Error::InvalidArgument(_))),
                "{:?} was accepted",
                literal,
            );
        }
        assert_eq!(Expr::from_decimal_str("1e40"), Err(Error::Overflow));
        assert_eq!(Expr::from_decimal_str("99999999999999999999"), Err(Error::Overflow));
    }

    #[test]
    fn floats() {
        assert_eq!(Expr::try_from(0.5_f64), ratio(1, 2));
        assert_eq!(Expr::try_from(-0.75_f64), ratio(-3, 4));
        assert_eq!(Expr::try_from(3.0_f64), Ok(Expr::number(3)));
        assert!(matches!(Expr::try_from(f64::NAN), Err(Error::InvalidArgument(_))));
        assert!(matches!(Expr::try_from(f64::INFINITY), Err(Error::InvalidArgument(_))));
    }
}

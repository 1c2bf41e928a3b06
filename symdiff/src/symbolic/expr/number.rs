//! The numeric value held by a constant.
//!
//! Integers and fractions are kept **exact**: `1/3 + 1/6` folds to `1/2`, and `2^-2` folds to the
//! fraction `1/4` rather than `0.25`. Floating-point numbers enter only through floating-point
//! literals, and any arithmetic that touches one produces a float.
//!
//! Floats follow [`f64`] semantics: every float result is rounded to the nearest [`f64`], so
//! `1e-200 * 1e-200` underflows to `0.0` and the value held is exactly the value displayed.
//!
//! This module **must never** produce non-finite [`Float`]s (`NaN` or infinities). Folds that
//! would produce one, that have no exact result (such as `2^(1/2)`), or whose exact result would
//! be unreasonably large (such as `3^4294967295`), are deferred by returning [`None`] from
//! [`Number::checked_add`], [`Number::checked_mul`], or [`Number::checked_pow`], leaving the
//! operation unevaluated.

use crate::error::{InvalidLiteral, NonFiniteLiteral, ZeroDenominator};
use crate::primitive::{float, float_from_str, int};
use rug::{ops::Pow, Float, Integer, Rational};
use std::{fmt, ops::Neg};
use symdiff_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest exact power that is folded, in bits of the base times the exponent. Larger powers
/// are left unevaluated.
const MAX_EXACT_POWER_BITS: u64 = 1 << 20;

/// A number, such as `2`, `3/4`, or `0.5`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An integer, such as `2` or `-144`.
    Integer(Integer),

    /// A fraction in lowest terms whose denominator is not `1`, such as `3/4`.
    Rational(Rational),

    /// A finite floating-point number, such as `0.5`.
    Float(Float),
}

impl Number {
    /// Wraps the given [`Rational`], downgrading it to a [`Number::Integer`] if its denominator is
    /// `1`.
    pub fn from_rational(r: Rational) -> Self {
        if *r.denom() == 1 {
            Self::Integer(r.into_numer_denom().0)
        } else {
            Self::Rational(r)
        }
    }

    /// Rounds the given [`Float`] to the nearest [`f64`] and wraps it, or returns [`None`] if the
    /// rounded value is not finite.
    pub fn from_float(f: Float) -> Option<Self> {
        let value = f.to_f64();
        value.is_finite().then(|| Self::Float(float(value)))
    }

    /// Returns true if this number is an integer or a fraction.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Float(_))
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        *self == 0
    }

    /// Returns true if this number is one.
    pub fn is_one(&self) -> bool {
        *self == 1
    }

    /// Returns the exact value of this number, or [`None`] if it is a float.
    fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::Integer(n) => Some(Rational::from(n)),
            Self::Rational(r) => Some(r.clone()),
            Self::Float(_) => None,
        }
    }

    /// Returns this number as a [`Float`].
    pub fn to_float(&self) -> Float {
        match self {
            Self::Integer(n) => float(n),
            Self::Rational(r) => float(r),
            Self::Float(f) => f.clone(),
        }
    }

    /// Returns the closest [`f64`] to this number.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => n.to_f64(),
            Self::Rational(r) => r.to_f64(),
            Self::Float(f) => f.to_f64(),
        }
    }

    /// Raises this number to the given power, if the result can be represented.
    ///
    /// - An exact base with an integer exponent gives an exact result. Negative exponents produce
    /// fractions, so `2^-2 = 1/4`. Zero raised to a negative exponent is left unevaluated.
    /// - If either side is a float, the result is a float, unless it would be `NaN` or infinite
    /// (such as `(-8.0)^(1/3)` or `0.0^-1`).
    /// - An exact base with a fractional exponent, such as `2^(1/2)`, has no exact value and is
    /// left unevaluated.
    /// - Exact powers too large to compute with, such as `3^4294967295`, are left unevaluated.
    pub fn checked_pow(&self, exponent: &Number) -> Option<Number> {
        match (self, exponent) {
            (Self::Float(_), _) | (_, Self::Float(_)) => {
                Self::from_float(self.to_float().pow(exponent.to_float()))
            },
            (base, Self::Integer(exp)) => {
                let base = base.to_rational()?;
                let magnitude = exp.clone().abs().to_u32()?;
                let base_bits = base.numer().significant_bits().max(base.denom().significant_bits());
                if base_bits > 1 && base_bits as u64 * magnitude as u64 > MAX_EXACT_POWER_BITS {
                    return None;
                }
                if *exp < 0 {
                    if base == 0 {
                        return None;
                    }
                    Some(Self::from_rational(base.pow(magnitude).recip()))
                } else {
                    Some(Self::from_rational(base.pow(magnitude)))
                }
            },
            (_, Self::Rational(_)) => None,
        }
    }

    /// Adds two numbers. The sum of two exact numbers is exact; otherwise it is a float, and
    /// [`None`] is returned if that float is not finite.
    pub fn checked_add(&self, rhs: &Number) -> Option<Number> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Some(Self::Integer(Integer::from(a + b))),
            (Self::Float(_), _) | (_, Self::Float(_)) => {
                Self::from_float(self.to_float() + rhs.to_float())
            },
            _ => Some(Self::from_rational(self.to_rational()? + rhs.to_rational()?)),
        }
    }

    /// Multiplies two numbers. The product of two exact numbers is exact; otherwise it is a float,
    /// and [`None`] is returned if that float is not finite.
    pub fn checked_mul(&self, rhs: &Number) -> Option<Number> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Some(Self::Integer(Integer::from(a * b))),
            (Self::Float(_), _) | (_, Self::Float(_)) => {
                Self::from_float(self.to_float() * rhs.to_float())
            },
            _ => Some(Self::from_rational(self.to_rational()? * rhs.to_rational()?)),
        }
    }

    /// Reads a numeric literal: an integer (`12`), a fraction (`3/4`), or a decimal number
    /// (`2.5`, `1e-3`). Surrounding whitespace is ignored.
    ///
    /// The spans of a returned error index into `src`.
    pub fn parse_literal(src: &str) -> Result<Self, Error> {
        let literal = src.trim();
        let start = src.len() - src.trim_start().len();
        let span = start..start + literal.len();
        let invalid = || Error::new(
            vec![span.clone()],
            InvalidLiteral { literal: literal.to_string() },
        );

        if let Some(slash) = literal.find('/') {
            let (numer_src, denom_src) = (&literal[..slash], &literal[slash + 1..]);
            let numer = numer_src.trim().parse::<Integer>().map_err(|_| invalid())?;
            let denom = denom_src.trim().parse::<Integer>().map_err(|_| invalid())?;
            if denom == 0 {
                let denom_start = start + slash + 1 + (denom_src.len() - denom_src.trim_start().len());
                let denom_span = denom_start..denom_start + denom_src.trim().len();
                return Err(Error::new(vec![denom_span], ZeroDenominator));
            }
            return Ok(Self::from_rational(Rational::from((numer, denom))));
        }

        if let Ok(n) = literal.parse::<Integer>() {
            return Ok(Self::Integer(n));
        }

        float_from_str(literal)
            .ok()
            .and_then(Self::from_float)
            .ok_or_else(invalid)
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        Self::Integer(n)
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::from_rational(r)
    }
}

macro_rules! number_from_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Self::Integer(int(n))
                }
            }
        )*
    };
}

number_from_primitive!(i32, i64, u32, u64);

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(Self::Float(float(value)))
        } else {
            Err(Error::new(Vec::new(), NonFiniteLiteral { value }))
        }
    }
}

impl TryFrom<&str> for Number {
    type Error = Error;

    fn try_from(literal: &str) -> Result<Self, Self::Error> {
        Self::parse_literal(literal)
    }
}

/// Numbers compare by value, regardless of representation: `2 == 2.0`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Rational(a), Self::Rational(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Rational(a), Self::Integer(b)) | (Self::Integer(b), Self::Rational(a)) => a == b,
            (Self::Float(a), Self::Integer(b)) | (Self::Integer(b), Self::Float(a)) => a == b,
            (Self::Float(a), Self::Rational(b)) | (Self::Rational(b), Self::Float(a)) => a == b,
        }
    }
}

/// [`Eq`] is sound because a [`Number`] never holds a `NaN`.
impl Eq for Number {}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Self::Integer(n) => n == other,
            Self::Rational(r) => r == other,
            Self::Float(f) => f == other,
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Integer(n) => Self::Integer(-n),
            Self::Rational(r) => Self::Rational(-r),
            Self::Float(f) => Self::Float(-f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Rational(r) => write!(f, "{}", r),
            // `Debug` keeps the trailing `.0` on whole floats, so `2.0` does not read as `2`
            Self::Float(x) => write!(f, "{:?}", x.to_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use super::*;

    fn n(value: i32) -> Number {
        Number::from(value)
    }

    fn frac(numer: i32, denom: i32) -> Number {
        Number::from(rational(numer, denom))
    }

    fn fl(value: f64) -> Number {
        Number::try_from(value).unwrap()
    }

    #[test]
    fn equality_across_representations() {
        assert_eq!(n(2), fl(2.0));
        assert_eq!(fl(0.5), frac(1, 2));
        assert_ne!(n(1), frac(1, 2));
        assert!(fl(0.0).is_zero());
        assert!(fl(-0.0).is_zero());
    }

    #[test]
    fn rational_downgrades_to_integer() {
        assert!(matches!(frac(4, 2), Number::Integer(_)));
        assert!(matches!(frac(1, 2).checked_add(&frac(1, 2)), Some(Number::Integer(_))));
        assert_eq!(frac(1, 3).checked_add(&frac(1, 6)), Some(frac(1, 2)));
    }

    #[test]
    fn exact_arithmetic() {
        assert_eq!(n(2).checked_add(&n(3)), Some(n(5)));
        assert_eq!(n(4).checked_mul(&frac(3, 4)), Some(n(3)));
        assert!(n(4).checked_mul(&frac(3, 4)).unwrap().is_exact());
    }

    #[test]
    fn float_arithmetic_is_contagious() {
        let sum = n(1).checked_add(&fl(0.5)).unwrap();
        assert!(!sum.is_exact());
        assert_eq!(sum, fl(1.5));

        let product = frac(1, 4).checked_mul(&fl(2.0)).unwrap();
        assert!(!product.is_exact());
        assert_eq!(product, fl(0.5));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(n(2).checked_pow(&n(10)), Some(n(1024)));
        assert_eq!(n(-3).checked_pow(&n(3)), Some(n(-27)));
        assert_eq!(frac(2, 3).checked_pow(&n(2)), Some(frac(4, 9)));
        assert_eq!(n(5).checked_pow(&n(0)), Some(n(1)));
        assert_eq!(n(0).checked_pow(&n(0)), Some(n(1)));
    }

    #[test]
    fn negative_powers_are_fractions() {
        assert_eq!(n(2).checked_pow(&n(-2)), Some(frac(1, 4)));
        assert_eq!(frac(2, 3).checked_pow(&n(-1)), Some(frac(3, 2)));
        assert_eq!(n(-2).checked_pow(&n(-3)), Some(frac(-1, 8)));
    }

    #[test]
    fn deferred_powers() {
        assert_eq!(n(0).checked_pow(&n(-1)), None);
        assert_eq!(n(2).checked_pow(&frac(1, 2)), None);
        assert_eq!(fl(-8.0).checked_pow(&fl(0.5)), None);
        assert_eq!(fl(0.0).checked_pow(&n(-1)), None);

        let huge = Number::Integer(int(u64::MAX));
        assert_eq!(n(2).checked_pow(&huge), None);
    }

    #[test]
    fn float_powers() {
        assert_eq!(n(4).checked_pow(&fl(0.5)), Some(fl(2.0)));
        assert_eq!(fl(1.5).checked_pow(&n(2)), Some(fl(2.25)));
    }

    #[test]
    fn display() {
        assert_eq!(n(-1).to_string(), "-1");
        assert_eq!(frac(1, 4).to_string(), "1/4");
        assert_eq!(frac(-3, 4).to_string(), "-3/4");
        assert_eq!(fl(0.5).to_string(), "0.5");
        assert_eq!(fl(2.0).to_string(), "2.0");
    }

    #[test]
    fn parse_literals() {
        assert_eq!(Number::parse_literal("12").unwrap(), n(12));
        assert_eq!(Number::parse_literal(" -7 ").unwrap(), n(-7));
        assert_eq!(Number::parse_literal("6/8").unwrap(), frac(3, 4));
        assert_eq!(Number::parse_literal("2.5").unwrap(), fl(2.5));
        assert!(Number::parse_literal("2.5").unwrap().to_string() == "2.5");
    }

    #[test]
    fn parse_invalid_literal() {
        let err = Number::parse_literal("  abc").unwrap_err();
        assert_eq!(err.spans, vec![2..5]);
        assert_eq!(
            err.downcast_ref::<InvalidLiteral>(),
            Some(&InvalidLiteral { literal: "abc".to_string() }),
        );

        assert!(Number::parse_literal("").unwrap_err().is::<InvalidLiteral>());
        assert!(Number::parse_literal("1/x").unwrap_err().is::<InvalidLiteral>());
        assert!(Number::parse_literal("inf").unwrap_err().is::<InvalidLiteral>());
    }

    #[test]
    fn parse_zero_denominator() {
        let err = Number::parse_literal("3/0").unwrap_err();
        assert!(err.is::<ZeroDenominator>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn float_arithmetic_rounds_like_f64() {
        let tiny = fl(1e-200);
        let product = tiny.checked_mul(&tiny).unwrap();
        assert!(product.is_zero());
        assert_eq!(product.to_string(), "0.0");

        assert_eq!(fl(0.1).checked_add(&fl(0.2)), Some(fl(0.1 + 0.2)));
        assert_eq!(Number::parse_literal("1e-400").unwrap(), fl(0.0));
    }

    #[test]
    fn overflowing_floats_are_deferred() {
        let huge = fl(1e300);
        assert_eq!(huge.checked_mul(&huge), None);
        assert_eq!(fl(f64::MAX).checked_add(&fl(f64::MAX)), None);
        assert_eq!(fl(10.0).checked_pow(&n(300_000_000)), None);
        assert_eq!(huge.checked_add(&-huge.clone()), Some(fl(0.0)));
    }

    #[test]
    fn huge_exact_powers_are_deferred() {
        let max = Number::Integer(int(u32::MAX));
        assert_eq!(n(3).checked_pow(&max), None);
        assert_eq!(frac(1, 3).checked_pow(&max), None);
        assert_eq!(n(1).checked_pow(&max), Some(n(1)));
        assert_eq!(n(-1).checked_pow(&max), Some(n(-1)));
        assert_eq!(n(0).checked_pow(&max), Some(n(0)));
        assert!(n(2).checked_pow(&n(1000)).is_some());
    }

    #[test]
    fn non_finite_floats() {
        let err = Number::try_from(f64::NAN).unwrap_err();
        assert!(err.spans.is_empty());
        assert!(err.is::<NonFiniteLiteral>());
        assert!(Number::try_from(f64::INFINITY).is_err());
    }
}

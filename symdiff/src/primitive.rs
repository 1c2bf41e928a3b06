//! Functions to construct [`Integer`]s, [`Rational`]s, and [`Float`]s from various types.

use rug::{float::ParseFloatError, Assign, Float, Integer, Rational};

/// The number of bits of precision to use for [`Float`] constants, the same as an [`f64`].
pub const PRECISION: u32 = f64::MANTISSA_DIGITS;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] from the given numerator and denominator, in lowest terms.
///
/// Panics if the denominator is zero.
pub fn rational<N, D>(numerator: N, denominator: D) -> Rational
where
    Rational: From<(N, D)>,
{
    Rational::from((numerator, denominator))
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Float`] from a string slice.
pub fn float_from_str(s: &str) -> Result<Float, ParseFloatError> {
    Ok(Float::with_val(PRECISION, Float::parse(s)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_lowest_terms() {
        let r = rational(6, 8);
        assert_eq!(*r.numer(), 3);
        assert_eq!(*r.denom(), 4);
    }

    #[test]
    fn float_parse() {
        assert_eq!(float_from_str("2.5").unwrap(), 2.5);
        assert!(float_from_str("two").is_err());
    }
}

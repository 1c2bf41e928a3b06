//! Ergonomic construction of [`Expression`] trees.
//!
//! Raw numbers can be mixed freely with expressions. Every operand is first converted into an
//! [`Operand`], which is either an existing expression or a literal [`Number`]; literals are then
//! lifted into [`Expression::Constant`]s by [`to_expression`].
//!
//! There are two ways to build trees:
//!
//! - The named constructors [`add`], [`sub`], [`mul`], [`pow`], and [`neg`] accept anything that
//! implements [`IntoOperand`], including floating-point numbers and numeric string literals.
//! These conversions can fail, so the constructors return a [`Result`].
//! - The operators `+`, `-`, `*`, unary `-`, and [`Pow::pow`] are implemented for operands that
//! can always be converted (expressions, integers, and exact fractions).
//!
//! ```
//! use symdiff::symbolic::{build::{add, mul, pow}, expr::Expression};
//! use symdiff::Pow;
//!
//! let x = Expression::variable("x");
//!
//! // 3x^2 + 2x + 1, with operators
//! let f = 3 * x.clone().pow(2) + 2 * x.clone() + 1;
//!
//! // the same, with named constructors
//! let g = add(add(mul(3, pow(&x, 2)?)?, mul(2, &x)?)?, 1)?;
//!
//! assert_eq!(f, g);
//! assert_eq!(f.to_string(), "(((3 * (x^2)) + (2 * x)) + 1)");
//! # Ok::<(), symdiff_error::Error>(())
//! ```

use rug::{ops::Pow, Integer, Rational};
use std::ops::{Add, Mul, Neg, Sub};
use symdiff_error::Error;
use super::expr::{Expression, Number};

/// An operand of a construction-layer operation: an expression, or a literal that still needs to
/// be lifted into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// An existing expression.
    Expr(Expression),

    /// A raw number.
    Literal(Number),
}

/// Lifts the operand into an [`Expression`], wrapping literals in [`Expression::Constant`].
pub fn to_expression(operand: Operand) -> Expression {
    match operand {
        Operand::Expr(expr) => expr,
        Operand::Literal(value) => Expression::Constant(value),
    }
}

impl From<Operand> for Expression {
    fn from(operand: Operand) -> Self {
        to_expression(operand)
    }
}

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        Self::Expr(expr)
    }
}

impl From<&Expression> for Operand {
    fn from(expr: &Expression) -> Self {
        Self::Expr(expr.clone())
    }
}

macro_rules! operand_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Literal(Number::from(value))
                }
            }
        )*
    };
}

operand_from_number!(Number, i32, i64, u32, u64, Integer, Rational);

/// A value that can be coerced into a [`Number`].
///
/// Returns an error if the value does not represent a finite number.
pub trait IntoNumber {
    /// Performs the coercion.
    fn into_number(self) -> Result<Number, Error>;
}

/// A value that can be coerced into an [`Operand`].
///
/// Returns an error if the value is a literal that does not represent a finite number.
pub trait IntoOperand {
    /// Performs the coercion.
    fn into_operand(self) -> Result<Operand, Error>;
}

macro_rules! infallible_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoNumber for $ty {
                fn into_number(self) -> Result<Number, Error> {
                    Ok(Number::from(self))
                }
            }
        )*
    };
}

infallible_number!(Number, i32, i64, u32, u64, Integer, Rational);

impl IntoNumber for f64 {
    fn into_number(self) -> Result<Number, Error> {
        Number::try_from(self)
    }
}

/// String literals are parsed with [`Number::parse_literal`].
impl IntoNumber for &str {
    fn into_number(self) -> Result<Number, Error> {
        Number::parse_literal(self)
    }
}

macro_rules! literal_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOperand for $ty {
                fn into_operand(self) -> Result<Operand, Error> {
                    Ok(Operand::Literal(self.into_number()?))
                }
            }
        )*
    };
}

literal_operand!(Number, i32, i64, u32, u64, Integer, Rational, f64, &str);

impl IntoOperand for Operand {
    fn into_operand(self) -> Result<Operand, Error> {
        Ok(self)
    }
}

impl IntoOperand for Expression {
    fn into_operand(self) -> Result<Operand, Error> {
        Ok(Operand::Expr(self))
    }
}

impl IntoOperand for &Expression {
    fn into_operand(self) -> Result<Operand, Error> {
        Ok(Operand::Expr(self.clone()))
    }
}

/// Coerces the value into an operand and lifts it into an [`Expression`].
fn lift(value: impl IntoOperand) -> Result<Expression, Error> {
    Ok(to_expression(value.into_operand()?))
}

/// Creates a constant from the given number.
pub fn constant(value: impl IntoNumber) -> Result<Expression, Error> {
    Ok(Expression::Constant(value.into_number()?))
}

/// Creates a variable with the given name.
pub fn variable(name: impl Into<String>) -> Expression {
    Expression::variable(name)
}

/// `a + b`
pub fn add(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Expression, Error> {
    Ok(Expression::sum(lift(lhs)?, lift(rhs)?))
}

/// `a - b`, built as `a + (-1 * b)`.
pub fn sub(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Expression, Error> {
    Ok(Expression::difference(lift(lhs)?, lift(rhs)?))
}

/// `a * b`
pub fn mul(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Expression, Error> {
    Ok(Expression::product(lift(lhs)?, lift(rhs)?))
}

/// `a ^ b`
pub fn pow(base: impl IntoOperand, exponent: impl IntoOperand) -> Result<Expression, Error> {
    Ok(Expression::power(lift(base)?, lift(exponent)?))
}

/// `-a`, built as `-1 * a`.
pub fn neg(operand: impl IntoOperand) -> Result<Expression, Error> {
    Ok(Expression::negation(lift(operand)?))
}

/// Implements a binary operator for [`Expression`] on the left, with any infallible operand on the
/// right, and for every literal type on the left with an [`Expression`] on the right.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $ctor:path) => {
        impl<T: Into<Operand>> $trait<T> for Expression {
            type Output = Expression;

            fn $method(self, rhs: T) -> Expression {
                $ctor(self, to_expression(rhs.into()))
            }
        }

        impl<T: Into<Operand>> $trait<T> for &Expression {
            type Output = Expression;

            fn $method(self, rhs: T) -> Expression {
                $ctor(self.clone(), to_expression(rhs.into()))
            }
        }

        binary_op!(@literals $trait, $method, $ctor, Number, i32, i64, u32, u64, Integer, Rational);
    };
    (@literals $trait:ident, $method:ident, $ctor:path, $($ty:ty),*) => {
        $(
            impl $trait<Expression> for $ty {
                type Output = Expression;

                fn $method(self, rhs: Expression) -> Expression {
                    $ctor(Expression::from(self), rhs)
                }
            }

            impl $trait<&Expression> for $ty {
                type Output = Expression;

                fn $method(self, rhs: &Expression) -> Expression {
                    $ctor(Expression::from(self), rhs.clone())
                }
            }
        )*
    };
}

binary_op!(Add, add, Expression::sum);
binary_op!(Sub, sub, Expression::difference);
binary_op!(Mul, mul, Expression::product);

/// `-a`, built as `-1 * a`.
impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        Expression::negation(self)
    }
}

impl Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        Expression::negation(self.clone())
    }
}

/// `a ^ b`. Rust has no exponentiation operator, so this uses [`rug`]'s [`Pow`] trait, the same
/// trait used to raise [`Integer`]s and [`Rational`]s to powers.
impl<T: Into<Operand>> Pow<T> for Expression {
    type Output = Expression;

    fn pow(self, exponent: T) -> Expression {
        Expression::power(self, to_expression(exponent.into()))
    }
}

impl<T: Into<Operand>> Pow<T> for &Expression {
    type Output = Expression;

    fn pow(self, exponent: T) -> Expression {
        Expression::power(self.clone(), to_expression(exponent.into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{InvalidLiteral, NonFiniteLiteral};
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expression {
        Expression::variable("x")
    }

    #[test]
    fn literals_are_lifted() {
        assert_eq!(to_expression(Operand::from(4)), Expression::from(4));
        assert_eq!(to_expression(Operand::from(x())), x());
        assert_eq!(add(&x(), 1).unwrap().to_string(), "(x + 1)");
        assert_eq!(add(1, &x()).unwrap().to_string(), "(1 + x)");
        assert_eq!(mul(0.5, &x()).unwrap().to_string(), "(0.5 * x)");
        assert_eq!(pow(&x(), "3/4").unwrap().to_string(), "(x^3/4)");
    }

    #[test]
    fn subtraction_is_addition_of_negation() {
        assert_eq!(sub(&x(), 2).unwrap().to_string(), "(x + (-1 * 2))");
        assert_eq!(sub(5, &x()).unwrap().to_string(), "(5 + (-1 * x))");
        assert_eq!(neg(&x()).unwrap().to_string(), "(-1 * x)");
    }

    #[test]
    fn operators_match_named_constructors() {
        assert_eq!(x() + 1, add(x(), 1).unwrap());
        assert_eq!(1 + x(), add(1, x()).unwrap());
        assert_eq!(x() - 1, sub(x(), 1).unwrap());
        assert_eq!(1 - x(), sub(1, x()).unwrap());
        assert_eq!(x() * x(), mul(x(), x()).unwrap());
        assert_eq!(3 * &x(), mul(3, x()).unwrap());
        assert_eq!(x().pow(2), pow(x(), 2).unwrap());
        assert_eq!(-x(), neg(x()).unwrap());
        assert_eq!(&x() * rational(1, 2), mul(x(), "1/2").unwrap());
    }

    #[test]
    fn polynomial_with_operators() {
        let x = x();
        let f: Expression = 3 * x.clone().pow(2) + 2 * &x + 1;
        assert_eq!(f.to_string(), "(((3 * (x^2)) + (2 * x)) + 1)");
    }

    #[test]
    fn constants_and_variables() {
        assert_eq!(constant(7).unwrap(), Expression::from(7));
        assert_eq!(constant("-2/6").unwrap(), Expression::from(rational(-1, 3)));
        assert_eq!(variable("y"), Expression::variable("y"));
    }

    #[test]
    fn coercion_errors() {
        let err = add(&x(), f64::NAN).unwrap_err();
        assert!(err.is::<NonFiniteLiteral>());

        let err = mul("two", &x()).unwrap_err();
        assert!(err.is::<InvalidLiteral>());
        assert_eq!(err.spans, vec![0..3]);

        assert!(constant(f64::NEG_INFINITY).is_err());
        assert!(pow(&x(), "1/0").is_err());
    }
}

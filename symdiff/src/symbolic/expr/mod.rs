//! The expression tree that differentiation and simplification operate on.
//!
//! An [`Expression`] is a binary tree built from five kinds of node: [`Expression::Constant`],
//! [`Expression::Variable`], [`Expression::Add`], [`Expression::Multiply`], and
//! [`Expression::Power`]. Every child is exclusively owned by its parent, and no operation in this
//! crate mutates a tree in place; transformations always build a new tree.
//!
//! There are no separate nodes for subtraction or negation. `a - b` is represented as
//! `a + (-1 * b)`, and `-a` as `-1 * a`.
//!
//! # Rendering
//!
//! The [`Display`](std::fmt::Display) implementation fully parenthesizes every binary operation,
//! regardless of precedence, so the output is never ambiguous:
//!
//! ```
//! use symdiff::symbolic::expr::Expression;
//!
//! let x = Expression::variable("x");
//! let expr = Expression::sum(
//!     Expression::product(Expression::from(3), Expression::power(x.clone(), Expression::from(2))),
//!     Expression::from(1),
//! );
//! assert_eq!(expr.to_string(), "((3 * (x^2)) + 1)");
//! ```
//!
//! # Equality
//!
//! [`PartialEq`] is **structural**: two expressions are equal if they have the same shape and
//! their leaves are equal. Operands are compared in order, so `x + 1` and `1 + x` are not equal.
//! Constants compare by numeric value, so `Constant(2)` and `Constant(2.0)` are equal.

mod iter;
pub mod number;

use iter::ExprIter;
pub use number::Number;
use rug::{Integer, Rational};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An algebraic expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expression {
    /// A number, such as `2` or `0.5`.
    Constant(Number),

    /// A named variable, such as `x`.
    Variable(String),

    /// The sum of two expressions.
    Add(Box<Expression>, Box<Expression>),

    /// The product of two expressions.
    Multiply(Box<Expression>, Box<Expression>),

    /// An expression (the base) raised to the power of another (the exponent).
    Power(Box<Expression>, Box<Expression>),
}

/// The default expression is the variable `x`.
impl Default for Expression {
    fn default() -> Self {
        Self::variable(crate::symbolic::derivative::DEFAULT_VARIABLE)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Multiply(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Self::Power(base, exp) => write!(f, "({}^{})", base, exp),
        }
    }
}

impl Expression {
    /// Creates a [`Expression::Variable`] with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// The constant `0`.
    pub fn zero() -> Self {
        Self::from(0)
    }

    /// The constant `1`.
    pub fn one() -> Self {
        Self::from(1)
    }

    /// Creates `lhs + rhs`. No simplification is done.
    pub fn sum(lhs: Self, rhs: Self) -> Self {
        Self::Add(Box::new(lhs), Box::new(rhs))
    }

    /// Creates `lhs * rhs`. No simplification is done.
    pub fn product(lhs: Self, rhs: Self) -> Self {
        Self::Multiply(Box::new(lhs), Box::new(rhs))
    }

    /// Creates `base^exponent`. No simplification is done.
    pub fn power(base: Self, exponent: Self) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    /// Creates `-1 * expr`. No simplification is done; even a constant is wrapped.
    pub fn negation(expr: Self) -> Self {
        Self::product(Self::from(-1), expr)
    }

    /// Creates `lhs + (-1 * rhs)`. No simplification is done.
    pub fn difference(lhs: Self, rhs: Self) -> Self {
        Self::sum(lhs, Self::negation(rhs))
    }

    /// If the expression is a [`Expression::Constant`], returns a reference to its value.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// If the expression is a [`Expression::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expression::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns true if the expression is the constant zero (in any representation, so `0.0`
    /// counts).
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    /// Returns true if the expression is the constant one (in any representation).
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// Returns the number of nodes in the expression tree.
    pub fn complexity(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

macro_rules! expression_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(value: $ty) -> Self {
                    Self::Constant(Number::from(value))
                }
            }
        )*
    };
}

expression_from_number!(Number, i32, i64, u32, u64, Integer, Rational);

/// Renders the expression as fully parenthesized text. Equivalent to [`ToString::to_string`].
pub fn to_text(expr: &Expression) -> String {
    expr.to_string()
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expression {
        Expression::variable("x")
    }

    #[test]
    fn render_leaves() {
        assert_eq!(to_text(&Expression::from(5)), "5");
        assert_eq!(to_text(&Expression::from(rational(1, 4))), "1/4");
        assert_eq!(to_text(&Expression::variable("theta")), "theta");
    }

    #[test]
    fn render_always_parenthesizes() {
        // 3x^2 + 2x + 1
        let expr = Expression::sum(
            Expression::sum(
                Expression::product(Expression::from(3), Expression::power(x(), Expression::from(2))),
                Expression::product(Expression::from(2), x()),
            ),
            Expression::from(1),
        );
        assert_eq!(expr.to_string(), "(((3 * (x^2)) + (2 * x)) + 1)");
    }

    #[test]
    fn render_difference_and_negation() {
        let expr = Expression::difference(x(), Expression::negation(Expression::from(2)));
        assert_eq!(expr.to_string(), "(x + (-1 * (-1 * 2)))");
    }

    #[test]
    fn default_is_x() {
        assert_eq!(Expression::default(), x());
    }

    #[test]
    fn structural_equality() {
        let a = Expression::sum(x(), Expression::from(1));
        let b = Expression::sum(x(), Expression::from(1));
        let swapped = Expression::sum(Expression::from(1), x());
        assert_eq!(a, b);
        assert_ne!(a, swapped);
    }

    #[test]
    fn constants_compare_by_value() {
        let float_two = Expression::Constant(Number::try_from(2.0).unwrap());
        assert_eq!(Expression::from(2), float_two);
        assert!(Expression::Constant(Number::try_from(0.0).unwrap()).is_zero());
        assert!(!x().is_zero());
        assert!(Expression::one().is_one());
    }

    #[test]
    fn post_order() {
        // (x + 1) * x^2
        let expr = Expression::product(
            Expression::sum(x(), Expression::from(1)),
            Expression::power(x(), Expression::from(2)),
        );
        let rendered = expr.post_order_iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(rendered, vec![
            "x",
            "1",
            "(x + 1)",
            "x",
            "2",
            "(x^2)",
            "((x + 1) * (x^2))",
        ]);
        assert_eq!(expr.complexity(), 7);
    }
}

//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a binary tree of [`Expression`] nodes. Unlike a computer
//! algebra system that flattens sums and products into lists of terms, every [`Expression::Add`],
//! [`Expression::Multiply`], and [`Expression::Power`] node has exactly two children, and the
//! tree keeps the exact shape it was built with. The [`build`] module provides the operators and
//! constructors used to build trees:
//!
//! ```
//! use symdiff::symbolic::expr::Expression;
//! use symdiff::Pow;
//!
//! let x = Expression::variable("x");
//! let f = 3 * x.clone().pow(2) + 2 * x + 1;
//! assert_eq!(f.to_string(), "(((3 * (x^2)) + (2 * x)) + 1)");
//! ```
//!
//! # Differentiation
//!
//! [`differentiate()`] computes the derivative of an expression with respect to a variable. The
//! result is returned exactly as the differentiation rules produce it, which is usually full of
//! multiplications by zero and one:
//!
//! ```
//! use symdiff::symbolic::{differentiate, expr::Expression, simplify};
//! use symdiff::Pow;
//!
//! let x = Expression::variable("x");
//! let f = 3 * x.clone().pow(2) + 2 * x + 1;
//!
//! let raw = differentiate(&f, "x");
//! assert_eq!(
//!     raw.to_string(),
//!     "((((0 * (x^2)) + (3 * ((2 * (x^(2 + -1))) * 1))) + ((0 * x) + (2 * 1))) + 0)",
//! );
//!
//! // `6x + 2`, not fully reduced
//! assert_eq!(simplify(&raw).to_string(), "((3 * (2 * x)) + 2)");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] removes additions of zero, multiplications by zero and one, and powers of zero
//! and one, and folds operations on two constants. It makes a single bottom-up pass, so it does
//! not reach a canonical form. For more information, see the [`mod@simplify`] module.

pub mod build;
pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{differentiate, differentiate_x};
pub use expr::{to_text, Expression, Number};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;

//! A small computer algebra kernel for symbolic differentiation and simplification.
//!
//! Expressions are built from constants, variables, addition, multiplication, and
//! exponentiation. The crate can differentiate them with respect to a variable, and simplify them
//! by folding constants and removing identities such as `x + 0` and `x * 1`.
//!
//! ```
//! use symdiff::{differentiate, simplify, variable};
//!
//! let x = variable("x");
//! let f = x.clone() * x;
//! assert_eq!(simplify(&differentiate(&f, "x")).to_string(), "(x + x)");
//! ```
//!
//! See the [`symbolic`] module for details.

pub mod error;
pub mod primitive;
pub mod symbolic;

pub use rug::ops::Pow;
pub use symbolic::build::{add, constant, mul, neg, pow, sub, to_expression, variable, IntoNumber, IntoOperand, Operand};
pub use symbolic::{
    differentiate,
    differentiate_x,
    simplify,
    simplify_with,
    simplify_with_steps,
    to_text,
    Expression,
    Number,
};
pub use symdiff_error::Error;

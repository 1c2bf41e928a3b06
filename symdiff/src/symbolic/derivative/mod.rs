//! Symbolic differentiation.
//!
//! [`differentiate`] walks the expression tree and applies the rule for each kind of node:
//!
//! | Node       | Derivative                          |
//! | ---------- | ----------------------------------- |
//! | `c`        | `0`                                 |
//! | `x`        | `1`, or `0` for any other variable  |
//! | `f + g`    | `f' + g'`                           |
//! | `f * g`    | `f' * g + f * g'`                   |
//! | `f^n`      | `n * f^(n + -1) * f'`               |
//!
//! Before a rule is applied, the children of the node are [simplified](crate::symbolic::simplify),
//! which keeps the intermediate trees small. The derivative itself is **not** simplified; call
//! [`simplify`](crate::symbolic::simplify()) on the result to fold constants.
//!
//! Variables other than the one being differentiated with respect to are treated as constants.
//!
//! # Limitations
//!
//! The power rule above is only correct when the exponent does not depend on the variable. For an
//! exponent that does, such as in `x^x`, the `ln(f) * f^n * n'` term is omitted, as there is no
//! logarithm in the expression language.

use super::expr::Expression;
use super::simplify::simplify;

/// The variable that [`differentiate_x`] differentiates with respect to.
pub const DEFAULT_VARIABLE: &str = "x";

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expression, rhs: &Expression, with: &str) -> Expression {
    Expression::sum(differentiate(lhs, with), differentiate(rhs, with))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expression, rhs: &Expression, with: &str) -> Expression {
    Expression::sum(
        Expression::product(differentiate(lhs, with), rhs.clone()),
        Expression::product(lhs.clone(), differentiate(rhs, with)),
    )
}

/// `(f^n)' = n * f^(n - 1) * f'`, for an exponent `n` that does not depend on the variable.
fn power_rule(base: &Expression, exponent: &Expression, with: &str) -> Expression {
    Expression::product(
        Expression::product(
            exponent.clone(),
            Expression::power(
                base.clone(),
                Expression::sum(exponent.clone(), Expression::from(-1)),
            ),
        ),
        differentiate(base, with),
    )
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// The result is not simplified.
pub fn differentiate(f: &Expression, with: &str) -> Expression {
    match f {
        Expression::Constant(_) => Expression::zero(),
        Expression::Variable(name) => {
            if name == with {
                Expression::one()
            } else {
                Expression::zero()
            }
        },
        Expression::Add(lhs, rhs) => sum_rule(&simplify(lhs), &simplify(rhs), with),
        Expression::Multiply(lhs, rhs) => product_rule(&simplify(lhs), &simplify(rhs), with),
        Expression::Power(base, exponent) => power_rule(&simplify(base), &simplify(exponent), with),
    }
}

/// Computes the derivative of the given expression with respect to `x`.
pub fn differentiate_x(f: &Expression) -> Expression {
    differentiate(f, DEFAULT_VARIABLE)
}

impl Expression {
    /// Computes the derivative of this expression with respect to the variable `with`. See
    /// [`differentiate`].
    pub fn differentiate(&self, with: &str) -> Expression {
        differentiate(self, with)
    }
}

//! Simplification of expressions.
//!
//! [`simplify`] rewrites an expression bottom-up: the children of each node are simplified first,
//! and then the first matching rule from [`rules`] is applied to the node itself. The rules are,
//! in priority order:
//!
//! | Node     | Rules                                                                     |
//! | -------- | ------------------------------------------------------------------------- |
//! | `a + b`  | `0+b = b`, `a+0 = a`, fold two constants                                  |
//! | `a * b`  | `0*b = 0`, `a*0 = 0`, `1*b = b`, `a*1 = a`, fold two constants            |
//! | `a ^ b`  | `a^0 = 1`, `a^1 = a`, fold two constants (when the result is representable) |
//!
//! Because the exponent check comes first, `0^0` simplifies to `1`.
//!
//! This is a **single pass**. A node produced by a rule is not simplified again, so the result is
//! not guaranteed to be fully reduced: `3 * (2 * x)` stays as it is, since neither product has
//! two constant operands.
//!
//! ```
//! use symdiff::symbolic::{expr::Expression, simplify};
//!
//! let x = Expression::variable("x");
//! let expr = (x.clone() + 0) * (Expression::from(2) + 3);
//! assert_eq!(simplify(&expr).to_string(), "(x * 5)");
//! ```
//!
//! To find out which rules were applied, use [`simplify_with_steps`].

pub mod rules;
pub mod step;

use super::expr::Expression;
use super::step_collector::StepCollector;
use step::Step;

/// Simplifies the children of the node, then applies one layer of rules to the node itself.
fn inner_simplify(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Expression {
    let node = match expr {
        Expression::Constant(_) | Expression::Variable(_) => return expr.clone(),
        Expression::Add(lhs, rhs) => Expression::sum(
            inner_simplify(lhs, step_collector),
            inner_simplify(rhs, step_collector),
        ),
        Expression::Multiply(lhs, rhs) => Expression::product(
            inner_simplify(lhs, step_collector),
            inner_simplify(rhs, step_collector),
        ),
        Expression::Power(base, exponent) => Expression::power(
            inner_simplify(base, step_collector),
            inner_simplify(exponent, step_collector),
        ),
    };

    rules::all(&node, step_collector).unwrap_or(node)
}

/// Simplifies the given expression.
///
/// For more information, see the [module-level documentation](self).
pub fn simplify(expr: &Expression) -> Expression {
    inner_simplify(expr, &mut ())
}

/// Simplifies the given expression, reporting each rule applied to the given [`StepCollector`].
pub fn simplify_with(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Expression {
    inner_simplify(expr, step_collector)
}

/// Simplifies the given expression, returning the result along with the rules that were applied,
/// in the order they were applied (children before their parents, left before right).
pub fn simplify_with_steps(expr: &Expression) -> (Expression, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(expr, &mut steps);
    (simplified, steps)
}

impl Expression {
    /// Simplifies this expression. See [`simplify`].
    pub fn simplify(&self) -> Expression {
        simplify(self)
    }
}

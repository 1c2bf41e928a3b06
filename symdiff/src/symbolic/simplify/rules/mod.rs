//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given and its direct children; the
//! children are expected to have been simplified already.

pub mod add;
pub mod multiply;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use super::{Expression, step::Step};

/// If the expression is an add expression, calls the given transformation function with the
/// left and right-hand-side of the sum.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(
    expr: &Expression,
    f: impl Fn(&Expression, &Expression) -> Option<Expression>,
) -> Option<Expression> {
    if let Expression::Add(lhs, rhs) = expr {
        f(lhs.as_ref(), rhs.as_ref())
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function
/// with the left and right-hand-side of the product.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(
    expr: &Expression,
    f: impl Fn(&Expression, &Expression) -> Option<Expression>,
) -> Option<Expression> {
    if let Expression::Multiply(lhs, rhs) = expr {
        f(lhs.as_ref(), rhs.as_ref())
    } else {
        None
    }
}

/// If the expression is a power expression, calls the given transformation function with the
/// base and exponent of the power.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(
    expr: &Expression,
    f: impl Fn(&Expression, &Expression) -> Option<Expression>,
) -> Option<Expression> {
    if let Expression::Power(base, exponent) = expr {
        f(base.as_ref(), exponent.as_ref())
    } else {
        None
    }
}

/// Applies the first rule that matches the expression, if any.
pub fn all(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
}

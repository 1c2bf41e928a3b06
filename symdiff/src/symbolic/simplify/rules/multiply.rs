//! Simplification rules for products.

use crate::symbolic::{
    expr::Expression,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_multiply(expr, |lhs, rhs| {
        (lhs.is_zero() || rhs.is_zero()).then(Expression::zero)
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Multiplies two constants together, unless the product is a float too large to represent.
///
/// `2*3 = 6`
/// `4*3/4 = 3`
pub fn multiply_constants(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_multiply(expr, |lhs, rhs| {
        let product = lhs.as_number()?.checked_mul(rhs.as_number()?)?;
        Some(Expression::Constant(product))
    })?;

    step_collector.push(Step::MultiplyConstants);
    Some(opt)
}

/// Applies all multiplication rules, in priority order.
pub fn all(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| multiply_constants(expr, step_collector))
}

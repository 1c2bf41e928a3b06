//! Simplification rules for sums.

use crate::symbolic::{
    expr::Expression,
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Adds two constants together, unless the sum is a float too large to represent.
///
/// `2+3 = 5`
/// `1/2+0.25 = 0.75`
pub fn add_constants(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_add(expr, |lhs, rhs| {
        let sum = lhs.as_number()?.checked_add(rhs.as_number()?)?;
        Some(Expression::Constant(sum))
    })?;

    step_collector.push(Step::AddConstants);
    Some(opt)
}

/// Applies all addition rules, in priority order.
pub fn all(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    add_zero(expr, step_collector)
        .or_else(|| add_constants(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Number;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expression {
        Expression::variable("x")
    }

    #[test]
    fn zero_on_either_side() {
        let mut steps = Vec::new();
        assert_eq!(add_zero(&(Expression::zero() + x()), &mut steps), Some(x()));
        assert_eq!(add_zero(&(x() + 0), &mut steps), Some(x()));
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test]
    fn zero_is_checked_before_folding() {
        let mut steps = Vec::new();
        assert_eq!(all(&(Expression::zero() + 7), &mut steps), Some(Expression::from(7)));
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn fold_constants() {
        assert_eq!(all(&(Expression::from(2) + 3), &mut ()), Some(Expression::from(5)));
    }

    #[test]
    fn overflowing_sum_is_kept() {
        let max = Expression::Constant(Number::try_from(f64::MAX).unwrap());
        let mut steps = Vec::new();
        assert_eq!(all(&(max.clone() + max.clone()), &mut steps), None);
        assert!(steps.is_empty());
    }

    #[test]
    fn no_rule_applies() {
        let mut steps = Vec::new();
        assert_eq!(all(&(x() + 1), &mut steps), None);
        assert_eq!(all(&(x() * 0), &mut steps), None);
        assert!(steps.is_empty());
    }
}

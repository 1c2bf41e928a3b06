//! Simplification rules for powers.

use crate::symbolic::{
    expr::Expression,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
///
/// This includes `0^0 = 1`.
pub fn power_zero(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_power(expr, |_, exponent| exponent.is_zero().then(Expression::one))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_power(expr, |base, exponent| exponent.is_one().then(|| base.clone()))?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Raises a constant to a constant power, if the result can be represented exactly (or the
/// operands are floats). See [`Number::checked_pow`](crate::symbolic::expr::Number::checked_pow).
///
/// `2^3 = 8`
/// `2^-2 = 1/4`
pub fn power_constants(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    let opt = do_power(expr, |base, exponent| {
        let value = base.as_number()?.checked_pow(exponent.as_number()?)?;
        Some(Expression::Constant(value))
    })?;

    step_collector.push(Step::PowerConstants);
    Some(opt)
}

/// Applies all power rules, in priority order.
pub fn all(expr: &Expression, step_collector: &mut dyn StepCollector<Step>) -> Option<Expression> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_constants(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use rug::ops::Pow;
    use super::*;

    fn x() -> Expression {
        Expression::variable("x")
    }

    #[test]
    fn zero_exponent() {
        assert_eq!(all(&x().pow(0), &mut ()), Some(Expression::one()));
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        let mut steps = Vec::new();
        assert_eq!(all(&Expression::zero().pow(0), &mut steps), Some(Expression::one()));
        assert_eq!(steps, vec![Step::PowerZero]);
    }

    #[test]
    fn one_exponent() {
        assert_eq!(all(&x().pow(1), &mut ()), Some(x()));
    }

    #[test]
    fn fold_constants() {
        assert_eq!(all(&Expression::from(2).pow(3), &mut ()), Some(Expression::from(8)));
        assert_eq!(all(&Expression::from(2).pow(-2), &mut ()), Some(Expression::from(rational(1, 4))));
    }

    #[test]
    fn deferred_folds() {
        let mut steps = Vec::new();
        assert_eq!(all(&Expression::zero().pow(-1), &mut steps), None);
        assert_eq!(all(&Expression::from(2).pow(rational(1, 2)), &mut steps), None);
        assert!(steps.is_empty());
    }

    #[test]
    fn no_rule_applies() {
        assert_eq!(all(&x().pow(2), &mut ()), None);
        assert_eq!(all(&Expression::from(2).pow(x()), &mut ()), None);
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simplification rule that was applied to an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `0+a = a`, `a+0 = a`
    AddZero,

    /// Two constants were added together.
    AddConstants,

    /// `0*a = 0`, `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`, `a*1 = a`
    MultiplyOne,

    /// Two constants were multiplied together.
    MultiplyConstants,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// A constant was raised to a constant power.
    PowerConstants,
}

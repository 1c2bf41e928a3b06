//! Errors raised while coercing raw values into constants.

use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// A string literal could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a numeric literal", self.literal),
    labels = ["this literal"],
    help = format!(
        "write an integer ({}), a fraction ({}), or a decimal number ({})",
        "12".fg(EXPR),
        "3/4".fg(EXPR),
        "2.5".fg(EXPR),
    ),
)]
pub struct InvalidLiteral {
    /// The literal, as it was given.
    pub literal: String,
}

/// A floating-point literal was NaN or infinite, which no constant can hold.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot use `{}` as a constant", self.value),
    labels = ["this value"],
    help = "constants must be finite numbers",
)]
pub struct NonFiniteLiteral {
    /// The offending value.
    pub value: f64,
}

/// A fraction literal had a zero denominator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "fraction literal has a zero denominator",
    labels = ["this denominator"],
)]
pub struct ZeroDenominator;

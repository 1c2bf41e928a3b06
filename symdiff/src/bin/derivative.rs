//! Differentiates `a*x^2 + 2x + 1` and prints the raw and simplified derivative.
//!
//! Usage: `derivative [--steps] [a]`, where `a` is a numeric literal such as `3`, `3/4`, or `0.5`
//! (default `3`).

use symdiff::{add, constant, differentiate_x, mul, pow, simplify_with_steps, variable, Error, Expression};

/// Builds `a*x^2 + 2x + 1`.
fn polynomial(a: &str) -> Result<Expression, Error> {
    let x = variable("x");
    add(add(mul(constant(a)?, pow(&x, 2)?)?, mul(2, &x)?)?, 1)
}

fn main() {
    let mut show_steps = false;
    let mut coefficient = String::from("3");
    for arg in std::env::args().skip(1) {
        if arg == "--steps" {
            show_steps = true;
        } else {
            coefficient = arg;
        }
    }

    let f = match polynomial(&coefficient) {
        Ok(f) => f,
        Err(err) => {
            err.report_to_stderr(&coefficient);
            std::process::exit(1);
        },
    };

    println!("Symbolic Differentiation System\n");
    println!("{}", "-".repeat(60));
    println!("Example Polynomial\n");
    println!("f(x) = {f}");

    let df = differentiate_x(&f);
    println!("f'(x) [raw] = {df}");

    let (simplified, steps) = simplify_with_steps(&df);
    println!("f'(x) [simplified] = {simplified}");

    if show_steps {
        println!("\nSteps:");
        for step in steps {
            println!("  {step:?}");
        }
    }
}

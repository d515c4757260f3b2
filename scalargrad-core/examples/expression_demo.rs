// examples/expression_demo.rs
//!
//! Builds `d = (a + b) * b`, prints it with its value, runs a backward pass and
//! prints every node's gradient, then compares the analytic gradient of `b` with
//! an empirical one obtained by perturbing `b`.

use scalargrad_core::{
    autograd::{check_grad, numerical_grad, GradCheckError, GradCheckOptions},
    constant, product, sum,
};

fn main() -> Result<(), GradCheckError> {
    let a = constant(-12312.0, Some("a"));
    let b = constant(19123.0, Some("b"));

    let c = sum(a.clone(), b.clone());
    let d = product(c.clone(), b.clone());

    println!("{}={}", d, d.evaluate());

    d.backwards();
    println!("grad(a)={}", a.grad());
    println!("grad(b)={}", b.grad());
    println!("grad(c)={}", c.grad());
    println!("grad(d)={}", d.grad());

    let epsilon = 0.001;
    println!(
        "empirical grad for b={}",
        numerical_grad(&d, &b, epsilon)?
    );

    // Same comparison for every leaf, within the default tolerance
    check_grad(&d, &[&a, &b], GradCheckOptions::default().with_epsilon(epsilon))?;
    println!("gradient check passed");

    Ok(())
}

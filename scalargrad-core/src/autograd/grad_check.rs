use crate::error::ExprError;
use crate::expr::Expr;
use num_traits::{Float, NumCast};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 whatever the scalar type
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Output before: {output_before:?}, Output after: {output_after:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_before: f64,
        output_after: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input {input_index} is not reachable from the checked expression.")]
    InputNotInGraph { input_index: usize },
    #[error("Epsilon {0:?} cannot be represented in the expression's scalar type")]
    UnrepresentableEpsilon(f64),
    #[error("Expression error during gradient check: {0}")]
    ExprError(ExprError),
}

// Map ExprError to GradCheckError::ExprError
impl From<ExprError> for GradCheckError {
    fn from(err: ExprError) -> Self {
        GradCheckError::ExprError(err)
    }
}

/// Tunables of [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckOptions {
    /// Step added to the probed input for the forward difference.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between the two gradients.
    pub tolerance: f64,
}

impl Default for GradCheckOptions {
    fn default() -> Self {
        GradCheckOptions {
            epsilon: 1e-3,
            tolerance: 1e-3,
        }
    }
}

impl GradCheckOptions {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Estimates `d root / d leaf` with a forward difference: `(E(x + eps) - E(x)) / eps`.
///
/// `leaf` must be a Constant. Its value is restored before returning, and no
/// gradient accumulator is touched.
pub fn numerical_grad<T: Float>(root: &Expr<T>, leaf: &Expr<T>, epsilon: T) -> Result<T, ExprError> {
    let original = leaf.value()?;
    let before = root.evaluate();
    leaf.set_value(original + epsilon)?;
    let after = root.evaluate();
    leaf.set_value(original)?;
    Ok((after - before) / epsilon)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Every entry of `inputs` must be a Constant reachable from `root`. The graph's
/// accumulators are cleared with `zero_grad()` and filled by one `backwards()` pass from
/// `root`; they keep those values after the check returns.
pub fn check_grad<T: Float>(
    root: &Expr<T>,
    inputs: &[&Expr<T>],
    options: GradCheckOptions,
) -> Result<(), GradCheckError> {
    let epsilon = <T as NumCast>::from(options.epsilon)
        .ok_or(GradCheckError::UnrepresentableEpsilon(options.epsilon))?;

    // --- Initial Checks ---
    let nodes = root.subtree();
    for (i, input) in inputs.iter().enumerate() {
        input.value()?; // Constants only
        if !nodes.iter().any(|node| node.ptr_eq(input)) {
            return Err(GradCheckError::InputNotInGraph { input_index: i });
        }
    }

    // --- Analytical gradients ---
    root.zero_grad();
    root.backwards();
    let analytical_grads: Vec<f64> = inputs.iter().map(|input| as_f64(input.grad())).collect();

    // --- Compare with numerical gradients ---
    for (i, input) in inputs.iter().enumerate() {
        let analytical_grad = analytical_grads[i];
        if !analytical_grad.is_finite() {
            log::warn!("check_grad: analytical gradient for input {} is {}", i, analytical_grad);
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let numerical = as_f64(numerical_grad(root, input, epsilon)?);
        if !numerical.is_finite() {
            let output_before = as_f64(root.evaluate());
            let original = input.value()?;
            input.set_value(original + epsilon)?;
            let output_after = as_f64(root.evaluate());
            input.set_value(original)?;
            log::warn!(
                "check_grad: numerical gradient for input {} is {} (output {} -> {})",
                i, numerical, output_before, output_after
            );
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                output_before,
                output_after,
            });
        }

        log::debug!(
            "check_grad: input {}: analytical = {}, numerical = {}",
            i, analytical_grad, numerical
        );

        let tolerance = options.tolerance;
        if !approx::relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad: numerical,
                difference: (analytical_grad - numerical).abs(),
            });
        }
    }

    Ok(())
}

fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

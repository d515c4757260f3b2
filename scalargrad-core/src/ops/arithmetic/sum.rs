// scalargrad-core/src/ops/arithmetic/sum.rs

use crate::expr::{BinaryOperation, Expr, ExprKind};
use num_traits::Float;
use std::ops::Add;

/// Infix symbol used when rendering a Sum.
pub const SYMBOL: char = '+';

// --- Forward Operation ---

/// Builds the node `left + right`.
pub fn sum_op<T: Float>(left: Expr<T>, right: Expr<T>) -> Expr<T> {
    Expr::new(ExprKind::Sum(BinaryOperation::new(left, right)))
}

pub(crate) fn forward<T: Float>(op: &BinaryOperation<T>) -> T {
    op.left().evaluate() + op.right().evaluate()
}

// --- Backward Operation ---

/// d(l + r)/dl = d(l + r)/dr = 1, so both children receive the upstream gradient unchanged.
pub(crate) fn backward<T: Float>(op: &BinaryOperation<T>, upstream: T) {
    op.left().accumulate(upstream);
    op.right().accumulate(upstream);

    op.left().backprop();
    op.right().backprop();
}

// --- Operator overloads ---

impl<T: Float> Add for Expr<T> {
    type Output = Expr<T>;

    fn add(self, rhs: Expr<T>) -> Expr<T> {
        sum_op(self, rhs)
    }
}

impl<'a, T: Float> Add<&'a Expr<T>> for &'a Expr<T> {
    type Output = Expr<T>;

    fn add(self, rhs: &'a Expr<T>) -> Expr<T> {
        sum_op(self.clone(), rhs.clone())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;

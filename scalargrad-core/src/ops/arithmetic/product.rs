// scalargrad-core/src/ops/arithmetic/product.rs

use crate::expr::{BinaryOperation, Expr, ExprKind};
use num_traits::Float;
use std::ops::Mul;

/// Infix symbol used when rendering a Product.
pub const SYMBOL: char = '*';

// --- Forward Operation ---

/// Builds the node `left * right`.
pub fn product_op<T: Float>(left: Expr<T>, right: Expr<T>) -> Expr<T> {
    Expr::new(ExprKind::Product(BinaryOperation::new(left, right)))
}

pub(crate) fn forward<T: Float>(op: &BinaryOperation<T>) -> T {
    op.left().evaluate() * op.right().evaluate()
}

// --- Backward Operation ---

/// Product rule: d(l * r)/dl = r and d(l * r)/dr = l.
///
/// Operand values are not cached from the forward pass; both subtrees are
/// re-evaluated here, which roughly doubles the work of a backward pass.
pub(crate) fn backward<T: Float>(op: &BinaryOperation<T>, upstream: T) {
    let (left, right) = (op.left(), op.right());

    left.accumulate(upstream * right.evaluate());
    right.accumulate(upstream * left.evaluate());

    left.backprop();
    right.backprop();
}

// --- Operator overloads ---

impl<T: Float> Mul for Expr<T> {
    type Output = Expr<T>;

    fn mul(self, rhs: Expr<T>) -> Expr<T> {
        product_op(self, rhs)
    }
}

impl<'a, T: Float> Mul<&'a Expr<T>> for &'a Expr<T> {
    type Output = Expr<T>;

    fn mul(self, rhs: &'a Expr<T>) -> Expr<T> {
        product_op(self.clone(), rhs.clone())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "product_test.rs"]
mod tests;

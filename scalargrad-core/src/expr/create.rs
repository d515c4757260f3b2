// src/expr/create.rs

use crate::expr::{Constant, Expr, ExprKind};
use crate::ops::arithmetic::{product_op, sum_op};
use num_traits::Float;

/// Creates a leaf node holding `value`, optionally labeled for display.
pub fn constant<T: Float>(value: T, label: Option<&str>) -> Expr<T> {
    Expr::new(ExprKind::Constant(Constant::new(value, label)))
}

/// Creates `left + right`. Both children are moved into the new node.
pub fn sum<T: Float>(left: Expr<T>, right: Expr<T>) -> Expr<T> {
    sum_op(left, right)
}

/// Creates `left * right`. Both children are moved into the new node.
pub fn product<T: Float>(left: Expr<T>, right: Expr<T>) -> Expr<T> {
    product_op(left, right)
}

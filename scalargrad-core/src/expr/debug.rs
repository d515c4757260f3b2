// src/expr/debug.rs
use crate::expr::{Expr, ExprKind};
use num_traits::Float;
use std::fmt;

// Manual implementation of Debug trait
impl<T: Float + fmt::Debug> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Constant(c) => write!(f, "Expr(kind=Constant, grad={:?}, {:?})", self.grad(), c),
            ExprKind::Sum(op) | ExprKind::Product(op) => write!(
                f,
                "Expr(kind={}, grad={:?}, left={:?}, right={:?})",
                self.kind().name(),
                self.grad(),
                op.left(),
                op.right()
            ),
        }
    }
}

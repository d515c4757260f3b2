// src/expr/display.rs
use crate::expr::{Expr, ExprKind};
use crate::ops::arithmetic::{product, sum};
use num_traits::Float;
use std::fmt;

/// Fully parenthesized rendering of the subtree, e.g. `((a(-12312)+b(19123))*b(19123))`.
/// Meant for diagnostics; it is not parsed back.
impl<T: Float + fmt::Display> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Constant(c) => fmt::Display::fmt(c, f),
            ExprKind::Sum(op) => op.fmt_infix(f, sum::SYMBOL),
            ExprKind::Product(op) => op.fmt_infix(f, product::SYMBOL),
        }
    }
}

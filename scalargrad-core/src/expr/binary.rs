// src/expr/binary.rs

use crate::expr::Expr;
use num_traits::Float;
use std::fmt;

/// Two-operand storage shared by `Sum` and `Product`.
///
/// Children are set once at construction and never reassigned, which is what
/// keeps a graph acyclic: a node can only reference nodes that existed before it.
pub struct BinaryOperation<T> {
    left: Expr<T>,
    right: Expr<T>,
}

impl<T: Float> BinaryOperation<T> {
    pub(crate) fn new(left: Expr<T>, right: Expr<T>) -> Self {
        BinaryOperation { left, right }
    }

    pub fn left(&self) -> &Expr<T> {
        &self.left
    }

    pub fn right(&self) -> &Expr<T> {
        &self.right
    }

    /// Writes `(left<symbol>right)`.
    pub(crate) fn fmt_infix(&self, f: &mut fmt::Formatter<'_>, symbol: char) -> fmt::Result
    where
        T: fmt::Display,
    {
        write!(f, "({}{}{})", self.left, symbol, self.right)
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for BinaryOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryOperation")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

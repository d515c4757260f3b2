// src/expr/mod.rs

use num_traits::Float;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::ExprError;

mod autograd;
mod binary;
mod leaf;
pub mod create;
mod debug;
mod display;

pub use binary::BinaryOperation;
pub use leaf::Constant;
// Re-export creation functions to make them public
pub use create::{constant, product, sum};

/// The closed set of node variants an expression graph is built from.
///
/// `evaluate`, `backprop` and the textual rendering all `match` on this enum,
/// so adding a variant is a compile error until every one of them handles it.
pub enum ExprKind<T> {
    /// Leaf holding a fixed scalar and an optional display label.
    Constant(Constant<T>),
    /// `left + right`.
    Sum(BinaryOperation<T>),
    /// `left * right`.
    Product(BinaryOperation<T>),
}

impl<T> ExprKind<T> {
    /// Short variant name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Constant(_) => "Constant",
            ExprKind::Sum(_) => "Sum",
            ExprKind::Product(_) => "Product",
        }
    }
}

/// Node state shared by every handle pointing at the same node.
pub(crate) struct ExprData<T> {
    /// Gradient accumulator: sum of the upstream gradients received so far.
    /// Starts at zero and is only reset by `clear_grad` / `zero_grad`.
    pub(crate) grad: Cell<T>,
    pub(crate) kind: ExprKind<T>,
}

/// Handle to a node of a scalar expression graph.
///
/// `Expr` wraps `Rc<ExprData>`:
/// 1.  **Shared Ownership:** the caller keeps handles to inner nodes (e.g. the
///     leaves) after moving clones into parent operations, so it can read their
///     gradients once `backwards()` returns. Cloning is O(1).
/// 2.  **Interior Mutability:** the gradient accumulator and a Constant's value live
///     in `Cell`s and can be updated through `&Expr`.
///
/// The intended shape is a tree. Reusing a handle as the child of two operations
/// turns it into a DAG; gradients below a shared operation node are then
/// over-counted, see [`Expr::backprop`].
pub struct Expr<T = f64> {
    pub(crate) data: Rc<ExprData<T>>,
}

impl<T: Float> Expr<T> {
    pub(crate) fn new(kind: ExprKind<T>) -> Self {
        Expr {
            data: Rc::new(ExprData {
                grad: Cell::new(T::zero()),
                kind,
            }),
        }
    }

    /// Returns the variant of this node.
    pub fn kind(&self) -> &ExprKind<T> {
        &self.data.kind
    }

    /// Current value of the gradient accumulator.
    pub fn grad(&self) -> T {
        self.data.grad.get()
    }

    /// Adds `delta` to the gradient accumulator.
    pub fn accumulate(&self, delta: T) {
        let grad = &self.data.grad;
        grad.set(grad.get() + delta);
    }

    /// Resets this node's accumulator to zero. Children are left untouched,
    /// use [`Expr::zero_grad`] to reset a whole graph.
    pub fn clear_grad(&self) {
        self.data.grad.set(T::zero());
    }

    /// Recomputes the value of this node from its children.
    ///
    /// Nothing is cached: every call walks the whole subgraph again, so the
    /// cost is proportional to the size of the subtree.
    pub fn evaluate(&self) -> T {
        match self.kind() {
            ExprKind::Constant(c) => c.value(),
            ExprKind::Sum(op) => crate::ops::arithmetic::sum::forward(op),
            ExprKind::Product(op) => crate::ops::arithmetic::product::forward(op),
        }
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind(), ExprKind::Constant(_))
    }

    /// Returns the `(left, right)` children of a binary operation, `None` for a leaf.
    pub fn children(&self) -> Option<(&Expr<T>, &Expr<T>)> {
        match self.kind() {
            ExprKind::Constant(_) => None,
            ExprKind::Sum(op) | ExprKind::Product(op) => Some((op.left(), op.right())),
        }
    }

    /// Returns the Constant payload if this node is a leaf.
    pub fn as_constant(&self) -> Option<&Constant<T>> {
        match self.kind() {
            ExprKind::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Display label of a Constant, `None` for unlabeled leaves and operations.
    pub fn label(&self) -> Option<&str> {
        self.as_constant().and_then(|c| c.label())
    }

    /// Reads the stored value of a Constant.
    pub fn value(&self) -> Result<T, ExprError> {
        self.as_constant()
            .map(|c| c.value())
            .ok_or_else(|| self.not_a_constant("value()"))
    }

    /// Overwrites the stored value of a Constant. The gradient accumulator is not touched.
    pub fn set_value(&self, value: T) -> Result<(), ExprError> {
        let c = self
            .as_constant()
            .ok_or_else(|| self.not_a_constant("set_value()"))?;
        c.set_value(value);
        Ok(())
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Expr<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Collects handles to every distinct node reachable from this one, in pre-order
    /// (node, then left subtree, then right subtree).
    ///
    /// Uses an explicit stack, so it does not recurse. Identity is the node's address,
    /// so a node shared under two parents is listed once, at its first visit.
    pub fn subtree(&self) -> Vec<Expr<T>> {
        let mut visited: HashSet<*const ExprData<T>> = HashSet::new();
        let mut nodes = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            if !visited.insert(Rc::as_ptr(&node.data)) {
                continue;
            }
            if let Some((left, right)) = node.children() {
                stack.push(right.clone());
                stack.push(left.clone());
            }
            nodes.push(node);
        }
        nodes
    }

    fn not_a_constant(&self, operation: &str) -> ExprError {
        ExprError::NotAConstant {
            operation: operation.to_string(),
            kind: self.kind().name(),
        }
    }
}

// Manual implementation of Clone so that `T` does not need to be `Clone`
impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Expr {
            data: Rc::clone(&self.data), // Clone the Rc, not the node
        }
    }
}

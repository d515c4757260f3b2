// src/expr/autograd.rs

use crate::expr::{Expr, ExprKind};
use crate::ops::arithmetic::{product, sum};
use num_traits::Float;

impl<T: Float> Expr<T> {
    /// Pushes this node's accumulated gradient into its children, then recurses.
    ///
    /// Precondition: the accumulator already holds the total upstream gradient for
    /// this node. Each binary node scales it by its local derivatives, adds the result
    /// to each child with [`Expr::accumulate`] and immediately calls `backprop()` on
    /// that child. Leaves do nothing.
    ///
    /// Because a child is recursed into right after one parent's contribution lands,
    /// exact chain-rule accumulation requires every non-leaf node to have exactly one
    /// parent. When an operation node is shared by two parents it propagates once per
    /// parent, each time pushing whatever total its accumulator holds at that moment,
    /// which over-counts its descendants.
    /// Shared leaves are fine since they never propagate further.
    ///
    /// Recursion depth equals the depth of the graph.
    pub fn backprop(&self) {
        log::trace!(
            "backprop: {} node, upstream grad = {:?}",
            self.kind().name(),
            self.grad().to_f64()
        );
        let upstream = self.grad();
        match self.kind() {
            ExprKind::Constant(_) => {}
            ExprKind::Sum(op) => sum::backward(op, upstream),
            ExprKind::Product(op) => product::backward(op, upstream),
        }
    }

    /// Computes the derivative of this node with respect to every node reachable from it.
    ///
    /// Seeds this node's accumulator with `1` (d self / d self) and runs [`Expr::backprop`].
    /// Accumulators are **not** cleared: the pass runs on zeroed accumulators and the values
    /// held beforehand are added back once it finishes, so calling `backwards()` twice
    /// leaves every reachable accumulator at exactly twice its single-pass value.
    /// Call [`Expr::zero_grad`] before each independent pass.
    pub fn backwards(&self) {
        log::debug!(
            "backwards() called on a {} node. Seeding accumulator with 1.",
            self.kind().name()
        );
        let nodes = self.subtree();
        let stale: Vec<T> = nodes
            .iter()
            .map(|node| {
                let grad = node.grad();
                node.clear_grad();
                grad
            })
            .collect();

        self.accumulate(T::one());
        self.backprop();

        for (node, grad) in nodes.iter().zip(stale) {
            node.accumulate(grad);
        }
    }

    /// Resets the accumulator of every node reachable from this one.
    ///
    /// Walks the graph with an explicit stack rather than recursion.
    pub fn zero_grad(&self) {
        let nodes = self.subtree();
        log::debug!("zero_grad(): clearing {} node accumulators", nodes.len());
        for node in nodes.iter() {
            node.clear_grad();
        }
    }
}

#[cfg(test)]
#[path = "autograd_test.rs"]
mod tests;

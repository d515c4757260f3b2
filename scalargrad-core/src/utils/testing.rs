use crate::expr::Expr;

/// Checks that a node's gradient accumulator is within `tolerance` of `expected`.
/// Panics with the node's rendering if it is not.
pub(crate) fn check_grad_near(node: &Expr, expected: f64, tolerance: f64) {
    let actual = node.grad();
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch for {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            node, actual, expected, diff, tolerance
        );
    }
}

/// Snapshot of every accumulator reachable from `root`, in `subtree()` order.
pub(crate) fn collect_grads(root: &Expr) -> Vec<f64> {
    root.subtree().iter().map(|node| node.grad()).collect()
}

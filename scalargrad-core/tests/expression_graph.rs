use approx::assert_abs_diff_eq;
use scalargrad_core::autograd::{check_grad, numerical_grad, GradCheckOptions};
use scalargrad_core::{constant, ExprKind};

// Include the common helper module
mod common;
use common::reference_graph;

#[test]
fn test_reference_graph_values() {
    let g = reference_graph();
    assert_eq!(g.c.evaluate(), 6811.0);
    assert_eq!(g.d.evaluate(), 130246753.0);
    assert!(matches!(g.c.kind(), ExprKind::Sum(_)));
    assert!(matches!(g.d.kind(), ExprKind::Product(_)));
}

#[test]
fn test_reference_graph_rendering() {
    let g = reference_graph();
    assert_eq!(g.d.to_string(), "((a(-12312)+b(19123))*b(19123))");
    assert_eq!(
        format!("{}={}", g.d, g.d.evaluate()),
        "((a(-12312)+b(19123))*b(19123))=130246753"
    );
}

#[test]
fn test_reference_graph_gradients() {
    let g = reference_graph();
    g.d.backwards();
    assert_eq!(g.d.grad(), 1.0);
    assert_eq!(g.c.grad(), 19123.0);
    assert_eq!(g.a.grad(), 19123.0);
    assert_eq!(g.b.grad(), 25934.0);
}

#[test]
fn test_reference_graph_empirical_gradient() {
    let g = reference_graph();
    g.d.backwards();

    // Perturb b by hand, as a caller would
    let d_before = g.d.evaluate();
    let b_value = g.b.value().unwrap();
    g.b.set_value(b_value + 0.001).unwrap();
    let empirical = (g.d.evaluate() - d_before) / 0.001;
    assert_abs_diff_eq!(empirical, g.b.grad(), epsilon = 1.0);

    // The perturbation leaves accumulators alone
    assert_eq!(g.b.grad(), 25934.0);
}

#[test]
fn test_reference_graph_grad_check() {
    let g = reference_graph();
    check_grad(&g.d, &[&g.a, &g.b], GradCheckOptions::default()).unwrap();
    let estimate = numerical_grad(&g.d, &g.a, 1e-3).unwrap();
    assert_abs_diff_eq!(estimate, 19123.0, epsilon = 0.01);
}

#[test]
fn test_repeated_backwards_without_reset_doubles() {
    let g = reference_graph();
    g.d.backwards();
    g.d.backwards();
    assert_eq!(g.d.grad(), 2.0);
    assert_eq!(g.c.grad(), 2.0 * 19123.0);
    assert_eq!(g.a.grad(), 2.0 * 19123.0);
    assert_eq!(g.b.grad(), 2.0 * 25934.0);

    g.d.zero_grad();
    g.d.backwards();
    assert_eq!(g.b.grad(), 25934.0);
}

#[test]
fn test_operator_syntax_builds_same_graph() {
    let a = constant(-12312.0, Some("a"));
    let b = constant(19123.0, Some("b"));
    let d = &(&a + &b) * &b;
    assert_eq!(d.to_string(), "((a(-12312)+b(19123))*b(19123))");
    d.backwards();
    assert_eq!(b.grad(), 25934.0);
}

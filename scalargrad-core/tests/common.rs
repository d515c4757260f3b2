use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::{constant, product, sum, Expr};

/// Nodes of `d = (a + b) * b` with a = -12312, b = 19123.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub struct ReferenceGraph {
    pub a: Expr,
    pub b: Expr,
    pub c: Expr,
    pub d: Expr,
}

#[allow(dead_code)]
pub fn reference_graph() -> ReferenceGraph {
    let a = constant(-12312.0, Some("a"));
    let b = constant(19123.0, Some("b"));
    let c = sum(a.clone(), b.clone());
    let d = product(c.clone(), b.clone());
    ReferenceGraph { a, b, c, d }
}

/// Builds a random tree (no shared nodes) of Sums and Products at most `depth` levels deep.
/// Every leaf created is pushed onto `leaves`; leaf values are drawn from N(0, 1).
#[allow(dead_code)]
pub fn random_tree(rng: &mut StdRng, depth: usize, leaves: &mut Vec<Expr>) -> Expr {
    if depth == 0 || rng.gen_bool(0.25) {
        let normal = Normal::new(0.0, 1.0).expect("Invalid normal distribution");
        let label = format!("x{}", leaves.len());
        let leaf = constant(normal.sample(rng), Some(label.as_str()));
        leaves.push(leaf.clone());
        return leaf;
    }
    let left = random_tree(rng, depth - 1, leaves);
    let right = random_tree(rng, depth - 1, leaves);
    if rng.gen_bool(0.5) {
        sum(left, right)
    } else {
        product(left, right)
    }
}

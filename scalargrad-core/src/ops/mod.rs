//! # Expression Operations Module (`ops`)
//!
//! Operator nodes of the expression graph, one file per operator.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operator has a constructor (`sum_op`, `product_op`) that wraps
//!   its two children in the matching [`ExprKind`](crate::expr::ExprKind) variant.
//! - **`forward` / `backward`:** Each operator file supplies its evaluation formula and the
//!   chain-rule step that pushes the upstream gradient into its children. `Expr::evaluate`
//!   and `Expr::backprop` dispatch to them with an exhaustive `match`.
//! - **`SYMBOL`:** The infix character used by the `Display` rendering.
//! - **`std::ops`:** `+` and `*` on `Expr` / `&Expr` build the same nodes as the `_op` functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Binary arithmetic operators (sum, product).

pub mod arithmetic;

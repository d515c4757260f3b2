//! Gradient tooling built on top of [`Expr::backwards`](crate::expr::Expr::backwards).
//!
//! The backward pass itself lives on `Expr` (see `expr/autograd.rs`); this module
//! holds the finite-difference checker used to validate it.

pub mod grad_check;

pub use grad_check::{check_grad, numerical_grad, GradCheckError, GradCheckOptions};

//! Scalar expression graphs with reverse-mode automatic differentiation.
//!
//! Build a graph bottom-up from [`constant`], [`sum`] and [`product`] (or the `+` / `*`
//! operators), call [`Expr::evaluate`] for the forward value and [`Expr::backwards`]
//! to fill every reachable node's gradient accumulator.
//!
//! ```
//! use scalargrad_core::{constant, product, sum};
//!
//! let a = constant(2.0, Some("a"));
//! let b = constant(3.0, Some("b"));
//! let c = sum(a.clone(), b.clone());
//! let d = product(c.clone(), b.clone());
//!
//! assert_eq!(d.evaluate(), 15.0);
//! d.backwards();
//! assert_eq!(a.grad(), 3.0);
//! assert_eq!(b.grad(), 8.0);
//! assert_eq!(d.to_string(), "((a(2)+b(3))*b(3))");
//! ```

pub mod autograd;
pub mod error;
pub mod expr;
pub mod ops;

pub(crate) mod utils;

// Re-export the node handle and constructors so they are reachable as `scalargrad_core::Expr`
pub use error::ExprError;
pub use expr::{constant, product, sum, Expr, ExprKind};
// Re-export traits required by public functions/structs
pub use num_traits;

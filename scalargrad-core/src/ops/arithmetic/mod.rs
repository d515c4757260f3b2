// Export foundational arithmetic operations directly
pub mod product;
pub mod sum;

// Re-export the primary operation functions
pub use product::product_op;
pub use sum::sum_op;

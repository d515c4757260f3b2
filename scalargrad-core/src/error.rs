use thiserror::Error;

/// Custom error type for the scalargrad expression API.
///
/// Arithmetic itself never fails: NaN and infinities flow through `evaluate()`
/// and `backwards()` untouched. These variants only cover misuse of the typed API.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ExprError {
    #[error("Operation '{operation}' requires a Constant node, got a {kind} node")]
    NotAConstant {
        operation: String,
        kind: &'static str,
    },
}

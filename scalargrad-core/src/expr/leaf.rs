// src/expr/leaf.rs

use num_traits::Float;
use std::cell::Cell;
use std::fmt;

/// Leaf payload: a scalar that only changes when the caller overwrites it.
pub struct Constant<T> {
    value: Cell<T>,
    label: Option<String>,
}

impl<T: Float> Constant<T> {
    pub(crate) fn new(value: T, label: Option<&str>) -> Self {
        Constant {
            value: Cell::new(value),
            label: label.map(str::to_owned),
        }
    }

    pub fn value(&self) -> T {
        self.value.get()
    }

    /// Overwrites the stored scalar, e.g. to perturb an input for a finite-difference probe.
    pub fn set_value(&self, value: T) {
        self.value.set(value);
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Renders `label(value)` when labeled, otherwise the bare value.
impl<T: Float + fmt::Display> fmt::Display for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}({})", label, self.value()),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constant")
            .field("value", &self.value())
            .field("label", &self.label)
            .finish()
    }
}

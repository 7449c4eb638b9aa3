//! Progress counting results.

use serde::{Deserialize, Serialize};

/// Completed-versus-eligible counts for a set of checklist items.
///
/// `completed` and `out_of` are tracked independently: an item that is
/// both completed and ignored still counts in `completed` while leaving
/// `out_of` reduced, so `completed > out_of` is representable. That
/// mirrors how the flags are defined and is left uncorrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResult {
    /// Number of completed items.
    pub completed: usize,
    /// Number of eligible (not ignored) items.
    pub out_of: usize,
}

impl ProgressResult {
    /// Creates a progress result.
    pub fn new(completed: usize, out_of: usize) -> Self {
        Self { completed, out_of }
    }

    /// Completion percentage in `0.0..=100.0`.
    ///
    /// An empty denominator reads as 0%, never NaN; callers display this
    /// value directly.
    pub fn percent(&self) -> f64 {
        if self.out_of == 0 {
            0.0
        } else {
            self.completed as f64 / self.out_of as f64 * 100.0
        }
    }
}

//! Request DTOs for the API.

use serde::Deserialize;

/// Set-flag request body for item completion/ignore toggles.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFlagRequest {
    /// The new flag value.
    pub value: bool,
}

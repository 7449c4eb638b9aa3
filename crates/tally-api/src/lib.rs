//! REST API for Tally.
//!
//! This crate serves the checklist dashboard data as plain JSON:
//! - Headline progress and per-tier gauges
//! - The radar dataset (one axis per section, one series per tier)
//! - The catalog with per-item completion/ignore state
//! - Flag toggling for individual items
//!
//! Rendering is entirely the client's concern; every response is a value
//! object. The catalog is loaded once at startup and each request reads one
//! fresh flag snapshot, so no computation ever sees half-loaded state.
//!
//! # Example
//!
//! ```ignore
//! use tally_api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::load(config.clone())?;
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;

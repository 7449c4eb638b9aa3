//! Core data models for Tally.
//!
//! This crate provides the fundamental data types used throughout the
//! Tally system: the checklist catalog, priority tiers, normalized item
//! ids, persisted flag snapshots, and the progress/radar value objects
//! handed to renderers.

pub mod catalog;
pub mod flags;
pub mod ids;
pub mod progress;
pub mod radar;
pub mod tier;

// Re-export main types
pub use catalog::{Catalog, ChecklistItem, Section};
pub use flags::{FlagMap, StateSnapshot};
pub use ids::ItemId;
pub use progress::ProgressResult;
pub use radar::{RadarDataset, RadarSeries};
pub use tier::PriorityTier;

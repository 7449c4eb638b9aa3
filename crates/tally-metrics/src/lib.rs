//! Checklist progress aggregation for Tally.
//!
//! This crate is the computation core: priority filtering, completed/eligible
//! counting, and radar dataset assembly. Every function here is a pure,
//! synchronous function of immutable snapshots: catalog in, flag state in,
//! fresh value objects out. Loading those snapshots (and failing when a
//! store is unreadable) is the concern of `tally-persistence`.
//!
//! # Example
//!
//! ```
//! use tally_metrics::{aggregate, build_radar, filter_tier};
//! use tally_models::{
//!     ChecklistItem, FlagMap, ItemId, PriorityTier, Section, StateSnapshot,
//! };
//!
//! let sections = vec![Section::new("Auth")
//!     .with_item(ChecklistItem::new("Use MFA", "recommended"))
//!     .with_item(ChecklistItem::new("Rotate Keys", "optional"))];
//!
//! let mut completion = FlagMap::new();
//! completion.set(&ItemId::normalize("Use MFA"), true);
//! let snapshot = StateSnapshot::new(completion, FlagMap::new());
//!
//! let progress = aggregate(&sections, &snapshot);
//! assert_eq!((progress.completed, progress.out_of), (1, 2));
//!
//! let recommended = filter_tier(&sections, PriorityTier::Recommended);
//! assert_eq!(recommended[0].checklist.len(), 1);
//!
//! let radar = build_radar(&sections, &snapshot);
//! assert_eq!(radar.labels, vec!["Auth".to_string()]);
//! ```

pub mod aggregate;
pub mod filter;
pub mod radar;
pub mod summary;

pub use aggregate::aggregate;
pub use filter::filter_tier;
pub use radar::build_radar;
pub use summary::{summarize, tier_progress};

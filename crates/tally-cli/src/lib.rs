//! Tally CLI library.
//!
//! This crate provides the `tally` command-line interface: progress
//! inspection, checklist listing, item flag toggling, radar dataset
//! output, and the HTTP API server.

pub mod cli;
pub mod commands;

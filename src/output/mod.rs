//! Output formatting for network summaries.
//!
//! This module handles rendering into a caller-provided sink:
//! - [`terminal`] - labeled summary table and range listings
//! - [`json`] - machine-readable summary

mod json;
mod terminal;

pub use json::write_json;
pub use terminal::{write_range, write_summary};

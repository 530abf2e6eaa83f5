//! Core engine for the calx line-oriented event calendar.
//!
//! This crate provides:
//! - the `.calx` line format (`format`)
//! - recurrence expansion over a date window (`recurrence`)
//! - multi-source aggregation (`query`) and write-back (`writer`)
//! - the storage seam (`store`) and configuration (`config`)

pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod format;
pub mod query;
pub mod recurrence;
pub mod store;
pub mod writer;

// Re-export the types most callers need at the crate root.
pub use date_range::DateRange;
pub use error::{CalxError, CalxResult};
pub use event::{Event, Recurrence};

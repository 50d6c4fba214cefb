//! Core types and countdown engine for the daysprout ecosystem.
//!
//! This crate provides everything shared by the daysprout binaries:
//! - `Event` and `Category` records and their JSON-file store
//! - the countdown engine: day distances, recurrence projection,
//!   unit formatting, event ordering and title search
//! - reminder fire-time projection for daysprout-notify

pub mod appearance;
pub mod config;
pub mod countdown;
pub mod error;
pub mod event;
pub mod ordering;
pub mod reminder;
pub mod store;

// Re-export the record types at crate root for convenience
pub use error::{DaySproutError, DaySproutResult};
pub use event::*;

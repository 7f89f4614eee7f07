//! Session tracking for guidance office visits.
//!
//! This module provides:
//! - [`SessionStore`]: in-memory check-in / check-out state keyed by student ID
//! - [`SessionRecord`], [`EndedSession`], [`SnapshotRow`]: the record and its projections
//! - [`Clock`]: the time source, swappable for tests
//! - [`format_elapsed`] and [`format_timestamp`]: the display formats shared with the log files

mod clock;
mod record;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use record::{
    format_elapsed, format_timestamp, EndedSession, SessionRecord, SnapshotRow, TIMESTAMP_FORMAT,
};
pub use store::SessionStore;

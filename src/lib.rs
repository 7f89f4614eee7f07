//! guidance-log - Front-desk visit logging for a guidance office.
//!
//! Staff check students in by ID and check them out later; each completed
//! visit is appended to a plain-text log, and the current list can be saved
//! as a snapshot on demand.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`logfile`] - Session log and snapshot files
//! - [`session`] - In-memory session state and time formatting
//! - [`tracker`] - The core shared by every front end
//! - [`ui`] - Prompts and terminal output
//! - [`view`] - Table and text presentations of the session list
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use guidance_log::session::{ManualClock, SessionStore};
//!
//! let clock = ManualClock::new(
//!     NaiveDate::from_ymd_opt(2024, 9, 3).unwrap().and_hms_opt(8, 0, 0).unwrap(),
//! );
//! let mut store = SessionStore::with_clock(&clock);
//!
//! store.start_session("123");
//! clock.advance_secs(125);
//! let visit = store.end_session("123").unwrap();
//! assert_eq!(visit.elapsed, "2 min 5 seconds");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logfile;
pub mod session;
pub mod tracker;
pub mod ui;
pub mod view;

pub use error::{GuidanceError, Result};

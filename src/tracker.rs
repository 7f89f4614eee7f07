//! The check-in / check-out core shared by every front end.
//!
//! [`GuidanceTracker`] owns the one [`SessionStore`] and [`LogWriter`] of a
//! run. Front ends talk to it through [`SessionTracking`] only.
//!
//! # Example
//!
//! ```no_run
//! use guidance_log::logfile::LogWriter;
//! use guidance_log::tracker::{GuidanceTracker, SessionTracking};
//!
//! let mut tracker = GuidanceTracker::new(LogWriter::new("/tmp/guidance"));
//! tracker.enter("123");
//! if let Some(done) = tracker.exit("123") {
//!     println!("{} stayed {}", done.id, done.elapsed);
//! }
//! ```

use crate::logfile::LogWriter;
use crate::session::{Clock, EndedSession, SessionStore, SnapshotRow, SystemClock};

/// Operations a front end may perform on the session state.
pub trait SessionTracking {
    /// Check a student in. Returns `false` if the ID was already tracked.
    fn enter(&mut self, id: &str) -> bool;

    /// Check a student out and log the visit.
    ///
    /// Returns the completed session, or `None` when there was nothing open
    /// under that ID. A failed log write is reported but does not undo the
    /// check-out.
    fn exit(&mut self, id: &str) -> Option<EndedSession>;

    /// Current state of every tracked session.
    fn rows(&self) -> Vec<SnapshotRow>;

    /// IDs that can still be checked out.
    fn open_ids(&self) -> Vec<String>;

    /// Overwrite the snapshot file. Returns whether the write succeeded.
    fn save_snapshot(&self, content: &str) -> bool;
}

/// Session store plus log writer.
#[derive(Debug)]
pub struct GuidanceTracker<C: Clock = SystemClock> {
    store: SessionStore<C>,
    writer: LogWriter,
}

impl GuidanceTracker<SystemClock> {
    /// Create a tracker on the system clock.
    pub fn new(writer: LogWriter) -> Self {
        Self::with_store(SessionStore::new(), writer)
    }
}

impl<C: Clock> GuidanceTracker<C> {
    /// Create a tracker around an existing store.
    pub fn with_store(store: SessionStore<C>, writer: LogWriter) -> Self {
        Self { store, writer }
    }

    /// The underlying store.
    pub fn store(&self) -> &SessionStore<C> {
        &self.store
    }

    /// The log writer.
    pub fn writer(&self) -> &LogWriter {
        &self.writer
    }
}

impl<C: Clock> SessionTracking for GuidanceTracker<C> {
    fn enter(&mut self, id: &str) -> bool {
        self.store.start_session(id)
    }

    fn exit(&mut self, id: &str) -> Option<EndedSession> {
        let ended = self.store.end_session(id)?;
        if let Err(e) = self.writer.append_completed_session(&ended) {
            tracing::error!(error = %e, "Error writing to file");
        }
        Some(ended)
    }

    fn rows(&self) -> Vec<SnapshotRow> {
        self.store.snapshot()
    }

    fn open_ids(&self) -> Vec<String> {
        self.store.open_ids()
    }

    fn save_snapshot(&self, content: &str) -> bool {
        match self.writer.overwrite_snapshot_file(content) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Error writing current log to file");
                false
            }
        }
    }
}

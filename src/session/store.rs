//! In-memory session storage.

use std::collections::HashMap;

use super::{format_elapsed, Clock, EndedSession, SessionRecord, SnapshotRow, SystemClock};

/// Tracks every session started during this process.
///
/// Records are keyed by student ID and are never removed, so a finished
/// visit stays visible until the program exits.
#[derive(Debug)]
pub struct SessionStore<C: Clock = SystemClock> {
    sessions: HashMap<String, SessionRecord>,
    clock: C,
}

impl SessionStore<SystemClock> {
    /// Create an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionStore<C> {
    /// Create an empty store on the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
        }
    }

    /// Check a student in.
    ///
    /// Does nothing if `id` is already tracked, open or closed. IDs are taken
    /// as-is, so blank and whitespace-only IDs are valid keys. Returns `true`
    /// when a new record was created.
    pub fn start_session(&mut self, id: &str) -> bool {
        if self.sessions.contains_key(id) {
            tracing::debug!(id, "start ignored, session already tracked");
            return false;
        }

        let now = self.clock.now();
        self.sessions
            .insert(id.to_string(), SessionRecord::open(id, now));
        tracing::debug!(id, time_in = %now, "session started");
        true
    }

    /// Check a student out.
    ///
    /// Returns the completed session when `id` was open. Unknown IDs and
    /// sessions that already have a time out are left untouched and yield
    /// `None`.
    pub fn end_session(&mut self, id: &str) -> Option<EndedSession> {
        let now = self.clock.now();
        let Some(record) = self.sessions.get_mut(id) else {
            tracing::debug!(id, "end ignored, no such session");
            return None;
        };
        if !record.is_open() {
            tracing::debug!(id, "end ignored, session already closed");
            return None;
        }

        record.time_out = Some(now);
        tracing::debug!(id, time_out = %now, "session ended");

        Some(EndedSession {
            id: record.id.clone(),
            time_in: record.time_in,
            time_out: now,
            elapsed: format_elapsed(record.time_in, Some(now)),
        })
    }

    /// Look up a record.
    pub fn get(&self, id: &str) -> Option<&SessionRecord> {
        self.sessions.get(id)
    }

    /// Project every record for display.
    ///
    /// Rows are ordered by time in, then by ID.
    pub fn snapshot(&self) -> Vec<SnapshotRow> {
        self.ordered().into_iter().map(|r| r.to_row()).collect()
    }

    /// IDs of students still checked in, in snapshot order.
    pub fn open_ids(&self) -> Vec<String> {
        self.ordered()
            .into_iter()
            .filter(|r| r.is_open())
            .map(|r| r.id.clone())
            .collect()
    }

    /// Number of tracked sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether nothing has been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn ordered(&self) -> Vec<&SessionRecord> {
        let mut records: Vec<&SessionRecord> = self.sessions.values().collect();
        records.sort_by(|a, b| a.time_in.cmp(&b.time_in).then_with(|| a.id.cmp(&b.id)));
        records
    }
}

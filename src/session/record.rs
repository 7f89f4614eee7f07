//! Session records and their text projections.

use chrono::NaiveDateTime;

/// Timestamp pattern used on screen and in both log files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One student's visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Student identifier.
    pub id: String,
    /// When the student checked in. Never changes once set.
    pub time_in: NaiveDateTime,
    /// When the student checked out, if they have.
    pub time_out: Option<NaiveDateTime>,
}

impl SessionRecord {
    /// Open a session at `time_in`.
    pub fn open(id: impl Into<String>, time_in: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            time_in,
            time_out: None,
        }
    }

    /// Whether the student is still checked in.
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }

    /// Elapsed time as displayed, empty while open.
    pub fn elapsed(&self) -> String {
        format_elapsed(self.time_in, self.time_out)
    }

    /// Project the record into display strings.
    pub fn to_row(&self) -> SnapshotRow {
        SnapshotRow {
            id: self.id.clone(),
            time_in: format_timestamp(self.time_in),
            time_out: self.time_out.map(format_timestamp).unwrap_or_default(),
            elapsed: self.elapsed(),
        }
    }
}

/// A session that has just been closed, handed to the log writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndedSession {
    pub id: String,
    pub time_in: NaiveDateTime,
    pub time_out: NaiveDateTime,
    /// Pre-formatted `"<m> min <s> seconds"`.
    pub elapsed: String,
}

/// Display strings for one row of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub id: String,
    pub time_in: String,
    /// Empty while the session is open.
    pub time_out: String,
    /// Empty while the session is open.
    pub elapsed: String,
}

/// Format a timestamp as `YYYY-MM-DD HH:mm:ss`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the time between check-in and check-out.
///
/// Whole seconds are split into minutes and remainder seconds, e.g.
/// `"2 min 5 seconds"`. Returns an empty string when `time_out` is absent.
pub fn format_elapsed(time_in: NaiveDateTime, time_out: Option<NaiveDateTime>) -> String {
    match time_out {
        Some(out) => {
            let seconds = (out - time_in).num_seconds();
            format!("{} min {} seconds", seconds / 60, seconds % 60)
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(8, 3, 9)
            .unwrap()
    }

    #[test]
    fn timestamp_is_zero_padded_24h() {
        assert_eq!(format_timestamp(t0()), "2024-01-05 08:03:09");
        let evening = t0() + Duration::hours(12);
        assert_eq!(format_timestamp(evening), "2024-01-05 20:03:09");
    }

    #[test]
    fn elapsed_splits_minutes_and_seconds() {
        let out = t0() + Duration::seconds(125);
        assert_eq!(format_elapsed(t0(), Some(out)), "2 min 5 seconds");
    }

    #[test]
    fn elapsed_zero() {
        assert_eq!(format_elapsed(t0(), Some(t0())), "0 min 0 seconds");
    }

    #[test]
    fn elapsed_under_a_minute() {
        let out = t0() + Duration::seconds(59);
        assert_eq!(format_elapsed(t0(), Some(out)), "0 min 59 seconds");
    }

    #[test]
    fn elapsed_over_an_hour_stays_in_minutes() {
        let out = t0() + Duration::seconds(3_725);
        assert_eq!(format_elapsed(t0(), Some(out)), "62 min 5 seconds");
    }

    #[test]
    fn elapsed_ignores_subsecond_remainder() {
        let out = t0() + Duration::milliseconds(61_900);
        assert_eq!(format_elapsed(t0(), Some(out)), "1 min 1 seconds");
    }

    #[test]
    fn elapsed_open_is_empty() {
        assert_eq!(format_elapsed(t0(), None), "");
    }

    #[test]
    fn elapsed_parts_recompose_duration() {
        for secs in [0_i64, 1, 59, 60, 61, 599, 3_600, 86_399] {
            let text = format_elapsed(t0(), Some(t0() + Duration::seconds(secs)));
            let parts: Vec<&str> = text.split_whitespace().collect();
            let m: i64 = parts[0].parse().unwrap();
            let s: i64 = parts[2].parse().unwrap();
            assert!(s < 60, "{}", text);
            assert_eq!(m * 60 + s, secs);
        }
    }

    #[test]
    fn open_record_row_has_blank_out_and_elapsed() {
        let row = SessionRecord::open("123", t0()).to_row();
        assert_eq!(row.id, "123");
        assert_eq!(row.time_in, "2024-01-05 08:03:09");
        assert_eq!(row.time_out, "");
        assert_eq!(row.elapsed, "");
    }

    #[test]
    fn closed_record_row_is_complete() {
        let mut record = SessionRecord::open("123", t0());
        record.time_out = Some(t0() + Duration::seconds(600));
        assert!(!record.is_open());

        let row = record.to_row();
        assert_eq!(row.time_out, "2024-01-05 08:13:09");
        assert_eq!(row.elapsed, "10 min 0 seconds");
    }
}

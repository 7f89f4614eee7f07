//! Time sources for session timestamps.

use std::cell::Cell;

use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// Supplies the current wall-clock time.
///
/// Timestamps are local time with second resolution.
pub trait Clock {
    /// Current local time, sub-second part truncated.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_second(Local::now().naive_local())
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use guidance_log::session::{Clock, ManualClock};
///
/// let start = NaiveDate::from_ymd_opt(2024, 9, 3)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance_secs(90);
/// assert_eq!(clock.now(), start + chrono::Duration::seconds(90));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(truncate_to_second(start)),
        }
    }

    /// Move the clock forward.
    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + Duration::seconds(secs));
    }

    /// Jump to an absolute time.
    pub fn set(&self, at: NaiveDateTime) {
        self.now.set(truncate_to_second(at));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

fn truncate_to_second(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn system_clock_has_no_subseconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }

    #[test]
    fn manual_clock_starts_where_told() {
        let clock = ManualClock::new(at(9, 15, 0));
        assert_eq!(clock.now(), at(9, 15, 0));
    }

    #[test]
    fn manual_clock_truncates_start() {
        let start = at(9, 15, 0).with_nanosecond(750_000_000).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), at(9, 15, 0));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(at(9, 15, 0));
        clock.advance_secs(125);
        assert_eq!(clock.now(), at(9, 17, 5));
    }

    #[test]
    fn manual_clock_set_jumps() {
        let clock = ManualClock::new(at(9, 15, 0));
        clock.set(at(14, 0, 0));
        assert_eq!(clock.now(), at(14, 0, 0));
    }

    #[test]
    fn clock_reference_delegates() {
        let clock = ManualClock::new(at(10, 0, 0));
        let by_ref = &clock;
        clock.advance_secs(1);
        assert_eq!(by_ref.now(), at(10, 0, 1));
    }
}

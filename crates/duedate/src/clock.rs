//! Sources of "now" and of the local UTC offset.
//!
//! Nothing in this crate reads the system clock directly. Every operation
//! that needs the current instant takes a [`Clock`], so tests can pin time
//! with a [`FixedClock`] while applications pass [`SystemClock`].

use std::sync::OnceLock;

use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};

/// Provides the current instant and the process-local UTC offset.
pub trait Clock {
    /// The current wall-clock instant in local time, without offset.
    fn now(&self) -> NaiveDateTime;

    /// The local UTC offset attached to timezone-accurate values.
    fn local_offset(&self) -> FixedOffset;

    /// Today's calendar date in local time.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The operating system clock.
///
/// The local offset is resolved on first use and kept for the lifetime of the
/// process. A host timezone change mid-run is not picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

static LOCAL_OFFSET: OnceLock<FixedOffset> = OnceLock::new();

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn local_offset(&self) -> FixedOffset {
        *LOCAL_OFFSET.get_or_init(|| {
            let offset = Local::now().offset().fix();
            log::debug!("resolved local utc offset {offset}");
            offset
        })
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// A clock at noon of `date`, UTC.
    ///
    /// Noon keeps day arithmetic away from midnight edges.
    pub fn at_noon(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        Self::new(date.and_time(noon), Utc.fix())
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn local_offset(&self) -> FixedOffset {
        self.offset
    }
}

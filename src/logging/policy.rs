//! When to report progress
use super::progress::{FlushPolicy, Stat};
use super::Id;
use coarsetime::{Duration as CoarseDuration, Instant as CoarseInstant};
use std::time::Duration;

/// Report whenever a counter reaches a multiple of `interval`.
///
/// The report follows the group in which the counter was incremented,
/// so counters should be logged after the values they count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EveryNth {
    /// Id of the counter to watch.
    pub counter: Id,
    pub interval: u64,
    due: bool,
}

impl EveryNth {
    pub const fn new(counter: Id, interval: u64) -> Self {
        Self {
            counter,
            interval,
            due: false,
        }
    }

    /// Report after every `interval` trials, as counted by the `trial` counter.
    pub fn trials(interval: u64) -> Self {
        Self::new(Id::new("trial"), interval)
    }
}

impl FlushPolicy for EveryNth {
    #[inline]
    fn observe(&mut self, id: &Id, stat: &Stat) {
        if *id == self.counter {
            if let Stat::Count { total, .. } = stat {
                self.due |= self.interval > 0 && total % self.interval == 0;
            }
        }
    }

    #[inline]
    fn after_group(&mut self) -> bool {
        self.due
    }

    #[inline]
    fn reported(&mut self) {
        self.due = false;
    }
}

/// Report when a group starts at least `period` after the previous report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Periodic {
    // Checked every group; a coarse clock is accurate enough for whole-second periods.
    pub period: CoarseDuration,
    last_report: CoarseInstant,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        Self {
            period: CoarseDuration::new(period.as_secs(), period.subsec_nanos()),
            last_report: CoarseInstant::now(),
        }
    }
}

impl Default for Periodic {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl FlushPolicy for Periodic {
    #[inline]
    fn before_group(&mut self) -> bool {
        self.last_report.elapsed() >= self.period
    }

    #[inline]
    fn reported(&mut self) {
        self.last_report = CoarseInstant::now();
    }
}

use super::{Id, LogError, Loggable, StatsLogger};
use crate::utils::stats::OnlineMeanVariance;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Decides when a [`ProgressLogger`] writes out a report.
pub trait FlushPolicy {
    /// Whether to report before starting a new group.
    #[inline]
    fn before_group(&mut self) -> bool {
        false
    }

    /// Observe the tally of `id` immediately after a value has been added to it.
    #[inline]
    fn observe(&mut self, _id: &Id, _stat: &Stat) {}

    /// Whether to report after the current group ends.
    #[inline]
    fn after_group(&mut self) -> bool {
        false
    }

    /// Note that a report has just been written.
    fn reported(&mut self);
}

/// Destination for the reports of a [`ProgressLogger`].
pub trait ReportWriter {
    /// Write one report.
    ///
    /// `entries` holds every id updated since the previous report, in sorted order.
    /// `elapsed` is the time covered by the report.
    fn write_report(&mut self, entries: &[(&Id, &Stat)], elapsed: Duration);
}

/// Running statistic of the values logged under one id.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat {
    /// Only [`Loggable::Nothing`] has been logged.
    Empty,
    /// Counter with its overall total and the part added since the last report.
    Count { total: u64, recent: u64 },
    /// Mean and variance of scalars logged since the last report.
    Mean(OnlineMeanVariance<f64>),
    /// How many times each index was logged since the last report.
    Histogram(Vec<usize>),
}

impl Stat {
    fn start(value: Loggable) -> Result<Self, LogError> {
        let mut stat = match value {
            Loggable::Nothing => return Ok(Self::Empty),
            Loggable::CounterIncrement(_) => Self::Count {
                total: 0,
                recent: 0,
            },
            Loggable::Scalar(_) => Self::Mean(OnlineMeanVariance::new()),
            Loggable::Index { size, .. } => Self::Histogram(vec![0; size]),
        };
        stat.add(value)?;
        Ok(stat)
    }

    /// Add a value. The statistic is unchanged if the value does not fit.
    fn add(&mut self, value: Loggable) -> Result<(), LogError> {
        match (self, value) {
            (Self::Empty, Loggable::Nothing) => {}
            (Self::Count { total, recent }, Loggable::CounterIncrement(n)) => {
                *total += n;
                *recent += n;
            }
            (Self::Mean(stats), Loggable::Scalar(x)) => stats.push(x),
            (Self::Histogram(counts), Loggable::Index { value, size }) => {
                if counts.len() != size {
                    return Err(LogError::IncompatibleIndexSize {
                        prev: counts.len(),
                        now: size,
                    });
                }
                let count = counts
                    .get_mut(value)
                    .ok_or(LogError::IndexOutOfRange { value, size })?;
                *count += 1;
            }
            (stat, value) => {
                return Err(LogError::IncompatibleValue {
                    prev: stat.kind(),
                    now: value.variant_name(),
                })
            }
        }
        Ok(())
    }

    /// Forget everything but counter totals.
    fn clear(&mut self) {
        match self {
            Self::Empty => {}
            Self::Count { recent, .. } => *recent = 0,
            Self::Mean(stats) => *stats = OnlineMeanVariance::new(),
            Self::Histogram(counts) => counts.iter_mut().for_each(|c| *c = 0),
        }
    }

    /// Name of the [`Loggable`] variant this statistic accepts.
    const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "Nothing",
            Self::Count { .. } => "CounterIncrement",
            Self::Mean(_) => "Scalar",
            Self::Histogram(_) => "Index",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Tally {
    stat: Stat,
    /// Updated since the last report
    fresh: bool,
}

/// Logger that tallies values by id and periodically reports the tallies.
///
/// Reports only happen between groups, as decided by the [`FlushPolicy`].
/// Any unreported values are reported when the logger is dropped.
/// A flush with nothing new to report writes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressLogger<P: FlushPolicy, W: ReportWriter> {
    policy: P,
    writer: W,
    tallies: BTreeMap<Id, Tally>,
    since: Instant,
}

impl<P: FlushPolicy, W: ReportWriter> ProgressLogger<P, W> {
    pub fn new(policy: P, writer: W) -> Self {
        Self {
            policy,
            writer,
            tallies: BTreeMap::new(),
            since: Instant::now(),
        }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<P: FlushPolicy + Default, W: ReportWriter + Default> Default for ProgressLogger<P, W> {
    fn default() -> Self {
        Self::new(P::default(), W::default())
    }
}

impl<P: FlushPolicy, W: ReportWriter> StatsLogger for ProgressLogger<P, W> {
    fn group_start(&mut self) {
        if self.policy.before_group() {
            self.flush();
        }
    }

    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        if let Some(tally) = self.tallies.get_mut(&id) {
            tally.stat.add(value)?;
            tally.fresh = true;
            self.policy.observe(&id, &tally.stat);
        } else {
            let stat = Stat::start(value)?;
            self.policy.observe(&id, &stat);
            self.tallies.insert(id, Tally { stat, fresh: true });
        }
        Ok(())
    }

    fn group_end(&mut self) {
        if self.policy.after_group() {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let entries: Vec<_> = self
            .tallies
            .iter()
            .filter(|(_, tally)| tally.fresh)
            .map(|(id, tally)| (id, &tally.stat))
            .collect();
        if entries.is_empty() {
            return;
        }
        self.writer.write_report(&entries, self.since.elapsed());

        for tally in self.tallies.values_mut() {
            tally.stat.clear();
            tally.fresh = false;
        }
        self.since = Instant::now();
        self.policy.reported();
    }
}

impl<P: FlushPolicy, W: ReportWriter> Drop for ProgressLogger<P, W> {
    fn drop(&mut self) {
        if self.tallies.values().any(|tally| tally.fresh) {
            self.flush();
        }
    }
}

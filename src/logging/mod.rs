//! Logging statistics from simulation runs
mod console;
mod policy;
mod progress;

pub use console::{Console, ConsoleLogger};
pub use policy::{EveryNth, Periodic};
pub use progress::{FlushPolicy, ProgressLogger, ReportWriter, Stat};
#[cfg(test)]
pub(crate) use progress::testing;

use std::borrow::Cow;
use std::fmt;
use std::iter::FromIterator;
use thiserror::Error;

/// Log statistics from a simulation run.
///
/// Values are logged in groups. Loggers may summarize many groups together but do not split
/// a group across summaries.
pub trait StatsLogger {
    /// Start a new log group.
    fn group_start(&mut self);

    /// Log a value within the current group.
    ///
    /// # Errors
    /// May return an error if the logged value is structurally incompatible
    /// with previous values logged under the same id.
    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError>;

    /// End the current log group.
    fn group_end(&mut self);

    /// Write out any pending summaries.
    fn flush(&mut self);

    /// Log a single value as its own group.
    fn log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        self.group_start();
        let result = self.group_log(id, value);
        self.group_end();
        result
    }

    #[inline]
    fn log_scalar(&mut self, id: Id, value: f64) {
        // Scalars are compatible with all other scalars
        let _ = self.log(id, Loggable::Scalar(value));
    }

    #[inline]
    fn log_counter_increment(&mut self, id: Id, increment: u64) {
        let _ = self.log(id, Loggable::CounterIncrement(increment));
    }

    /// Log a sample from the index set `0 .. size`.
    fn log_index(&mut self, id: Id, value: usize, size: usize) -> Result<(), LogError> {
        self.log(id, Loggable::Index { value, size })
    }
}

/// Logger that does nothing
impl StatsLogger for () {
    #[inline]
    fn group_start(&mut self) {}
    #[inline]
    fn group_log(&mut self, _: Id, _: Loggable) -> Result<(), LogError> {
        Ok(())
    }
    #[inline]
    fn group_end(&mut self) {}
    #[inline]
    fn flush(&mut self) {}
}

impl<L: StatsLogger + ?Sized> StatsLogger for &'_ mut L {
    #[inline]
    fn group_start(&mut self) {
        L::group_start(self)
    }
    #[inline]
    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        L::group_log(self, id, value)
    }
    #[inline]
    fn group_end(&mut self) {
        L::group_end(self)
    }
    #[inline]
    fn flush(&mut self) {
        L::flush(self)
    }
}

impl<L: StatsLogger + ?Sized> StatsLogger for Box<L> {
    #[inline]
    fn group_start(&mut self) {
        L::group_start(self)
    }
    #[inline]
    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        L::group_log(self, id, value)
    }
    #[inline]
    fn group_end(&mut self) {
        L::group_end(self)
    }
    #[inline]
    fn flush(&mut self) {
        L::flush(self)
    }
}

/// Log to both loggers
impl<A: StatsLogger, B: StatsLogger> StatsLogger for (A, B) {
    fn group_start(&mut self) {
        self.0.group_start();
        self.1.group_start();
    }
    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        let first = self.0.group_log(id.clone(), value.clone());
        let second = self.1.group_log(id, value);
        first.and(second)
    }
    fn group_end(&mut self) {
        self.0.group_end();
        self.1.group_end();
    }
    fn flush(&mut self) {
        self.0.flush();
        self.1.flush();
    }
}

/// A value that can be logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Loggable {
    /// Nothing. No data to log.
    Nothing,
    /// Increment a counter.
    CounterIncrement(u64),
    /// A scalar value. Aggregate by taking means.
    Scalar(f64),
    /// A sample from a distrbution over `0 .. size`.
    Index { value: usize, size: usize },
}

impl Loggable {
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Nothing => "Nothing",
            Self::CounterIncrement(_) => "CounterIncrement",
            Self::Scalar(_) => "Scalar",
            Self::Index { .. } => "Index",
        }
    }
}

impl From<f64> for Loggable {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

/// Hierarchical identifier of a logged value, displayed as `a/b/c`.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id {
    path: Vec<Cow<'static, str>>,
}

impl Id {
    pub fn new<T: Into<Cow<'static, str>>>(name: T) -> Self {
        Self {
            path: vec![name.into()],
        }
    }

    /// Extend this id with a child component.
    #[must_use]
    pub fn with<T: Into<Cow<'static, str>>>(mut self, name: T) -> Self {
        self.path.push(name.into());
        self
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.path.iter().map(AsRef::as_ref)
    }
}

impl<T: Into<Cow<'static, str>>> FromIterator<T> for Id {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            path: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&'static str> for Id {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for component in &self.path {
            if first {
                first = false;
            } else {
                f.write_str("/")?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}

/// Error logging a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("incompatible value type; previously {prev} now {now}")]
    IncompatibleValue {
        prev: &'static str,
        now: &'static str,
    },
    #[error("incompatible index size; previously {prev} now {now}")]
    IncompatibleIndexSize { prev: usize, now: usize },
    #[error("index {value} is out of range for size {size}")]
    IndexOutOfRange { value: usize, size: usize },
}

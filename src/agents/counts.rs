//! Arm pull statistics shared by all agents
use crate::BanditError;
use ndarray::Array1;
use serde::Serialize;

/// Per-arm counts of observed successes and failures.
///
/// `successes[k] + failures[k]` is the number of times arm `k` has been pulled
/// and `total_pulls` is the sum of that over all arms.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ArmCounts {
    successes: Array1<u64>,
    failures: Array1<u64>,
    total_pulls: u64,
}

impl ArmCounts {
    /// All-zero counts for `num_arms` arms.
    pub fn new(num_arms: usize) -> Self {
        Self {
            successes: Array1::zeros(num_arms),
            failures: Array1::zeros(num_arms),
            total_pulls: 0,
        }
    }

    /// Counts with the given per-arm successes and failures.
    ///
    /// # Panics
    /// If `successes` and `failures` have different lengths.
    pub fn from_counts(successes: Vec<u64>, failures: Vec<u64>) -> Self {
        assert_eq!(
            successes.len(),
            failures.len(),
            "successes and failures must have one entry per arm"
        );
        let total_pulls = successes.iter().chain(&failures).sum();
        Self {
            successes: Array1::from(successes),
            failures: Array1::from(failures),
            total_pulls,
        }
    }

    pub fn num_arms(&self) -> usize {
        self.successes.len()
    }

    pub const fn successes(&self) -> &Array1<u64> {
        &self.successes
    }

    pub const fn failures(&self) -> &Array1<u64> {
        &self.failures
    }

    pub const fn total_pulls(&self) -> u64 {
        self.total_pulls
    }

    /// Number of times `arm` has been pulled.
    ///
    /// # Panics
    /// If `arm` is out of range.
    pub fn pulls(&self, arm: usize) -> u64 {
        self.successes[arm] + self.failures[arm]
    }

    /// Fraction of pulls of `arm` that succeeded; `None` if the arm has never been pulled.
    pub fn empirical_mean(&self, arm: usize) -> Option<f64> {
        let pulls = self.pulls(arm);
        if pulls == 0 {
            None
        } else {
            Some(self.successes[arm] as f64 / pulls as f64)
        }
    }

    /// Record the reward from pulling `action`.
    ///
    /// A reward of exactly `1.0` counts as a success, anything else as a failure.
    ///
    /// # Errors
    /// [`BanditError::InvalidAction`] if `action` is not an arm index. The counts are unchanged.
    #[allow(clippy::float_cmp)]
    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), BanditError> {
        let num_arms = self.num_arms();
        let count = if reward == 1.0 {
            self.successes.get_mut(action)
        } else {
            self.failures.get_mut(action)
        }
        .ok_or(BanditError::InvalidAction { action, num_arms })?;
        *count += 1;
        self.total_pulls += 1;
        Ok(())
    }

    /// Zero all counts and resize to `num_arms` arms.
    pub fn reset(&mut self, num_arms: usize) {
        *self = Self::new(num_arms);
    }
}

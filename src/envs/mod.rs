//! Bandit environments
mod bandits;

pub use bandits::{
    BernoulliBandit, DriftingBernoulliBandit, DriftingBernoulliBandits, UniformBernoulliBandits,
};

use crate::{BanditError, Prng};
use std::fmt;
use thiserror::Error;

/// A multi-armed bandit environment.
pub trait Environment: fmt::Display {
    /// Number of arms. Always at least one.
    fn num_arms(&self) -> usize;

    /// Pull an arm and observe the reward, either `0.0` or `1.0`.
    ///
    /// # Errors
    /// [`BanditError::InvalidAction`] if `action` is not an arm index.
    fn pull(&mut self, action: usize) -> Result<f64, BanditError>;

    /// Expected reward of the best arm; the baseline for measuring regret.
    fn optimal_reward(&self) -> f64;

    /// Prepare for a new trial.
    fn reset(&mut self) {}

    /// Advance time by one step. Non-stationary environments change their arms here.
    fn step(&mut self) {}
}

impl<T: Environment + ?Sized> Environment for Box<T> {
    fn num_arms(&self) -> usize {
        T::num_arms(self)
    }
    fn pull(&mut self, action: usize) -> Result<f64, BanditError> {
        T::pull(self, action)
    }
    fn optimal_reward(&self) -> f64 {
        T::optimal_reward(self)
    }
    fn reset(&mut self) {
        T::reset(self)
    }
    fn step(&mut self) {
        T::step(self)
    }
}

/// Build an environment.
pub trait BuildEnv {
    type Environment: Environment;

    /// Build an environment instance.
    ///
    /// # Args
    /// * `rng` - Random number generator for randomness in the environment structure
    ///           and for seeding the environment's own reward generator.
    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError>;
}

/// Error building an environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildEnvError {
    #[error("bandit must have at least one arm")]
    NoArms,
    #[error("probability {probability} of arm {arm} is not in [0, 1]")]
    InvalidProbability { arm: usize, probability: f64 },
    #[error("drift scale {0} must be finite and non-negative")]
    InvalidDriftScale(f64),
}

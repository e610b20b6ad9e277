use super::{BuildEnv, BuildEnvError, Environment};
use crate::{BanditError, Prng};
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A multi-armed bandit with Bernoulli-distribution arm rewards.
///
/// The arm probabilities are fixed at construction; `reset` and `step` do nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct BernoulliBandit {
    probabilities: Vec<f64>,
    rng: Prng,
}

impl BernoulliBandit {
    /// Bandit with the given arm success probabilities, drawing rewards from `rng`.
    pub fn new(probabilities: Vec<f64>, rng: Prng) -> Result<Self, BuildEnvError> {
        if probabilities.is_empty() {
            return Err(BuildEnvError::NoArms);
        }
        if let Some((arm, &probability)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(BuildEnvError::InvalidProbability { arm, probability });
        }
        Ok(Self { probabilities, rng })
    }

    /// Bandit with arm probabilities sampled uniformly from `[0, 1)`.
    pub fn uniform(num_arms: usize, rng: &mut Prng) -> Result<Self, BuildEnvError> {
        let probabilities = (0..num_arms).map(|_| rng.gen()).collect();
        Self::new(probabilities, Prng::seed_from_u64(rng.gen()))
    }

    /// Success probability of each arm.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

impl fmt::Display for BernoulliBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BernoulliBandit({:?})", self.probabilities)
    }
}

impl Environment for BernoulliBandit {
    fn num_arms(&self) -> usize {
        self.probabilities.len()
    }

    fn pull(&mut self, action: usize) -> Result<f64, BanditError> {
        let probability = *self
            .probabilities
            .get(action)
            .ok_or(BanditError::InvalidAction {
                action,
                num_arms: self.probabilities.len(),
            })?;
        let value: f64 = self.rng.gen();
        Ok(if value <= probability { 1.0 } else { 0.0 })
    }

    fn optimal_reward(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Configuration for a [`BernoulliBandit`] with uniformly sampled arm probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniformBernoulliBandits {
    pub num_arms: usize,
}

impl UniformBernoulliBandits {
    pub const fn new(num_arms: usize) -> Self {
        Self { num_arms }
    }
}

impl Default for UniformBernoulliBandits {
    fn default() -> Self {
        Self::new(5)
    }
}

impl BuildEnv for UniformBernoulliBandits {
    type Environment = BernoulliBandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        BernoulliBandit::uniform(self.num_arms, rng)
    }
}

/// A Bernoulli bandit whose arm probabilities follow a Gaussian random walk.
///
/// Each `step` adds independent `N(0, drift_scale²)` noise to every probability,
/// clamping the result to `[0, 1]`. `reset` restores the initial probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftingBernoulliBandit {
    bandit: BernoulliBandit,
    initial_probabilities: Vec<f64>,
    drift_scale: f64,
}

impl DriftingBernoulliBandit {
    pub fn new(bandit: BernoulliBandit, drift_scale: f64) -> Result<Self, BuildEnvError> {
        if !(drift_scale.is_finite() && drift_scale >= 0.0) {
            return Err(BuildEnvError::InvalidDriftScale(drift_scale));
        }
        Ok(Self {
            initial_probabilities: bandit.probabilities.clone(),
            bandit,
            drift_scale,
        })
    }

    /// Current success probability of each arm.
    pub fn probabilities(&self) -> &[f64] {
        self.bandit.probabilities()
    }

    pub const fn drift_scale(&self) -> f64 {
        self.drift_scale
    }
}

impl fmt::Display for DriftingBernoulliBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DriftingBernoulliBandit({:?}, σ={})",
            self.initial_probabilities, self.drift_scale
        )
    }
}

impl Environment for DriftingBernoulliBandit {
    fn num_arms(&self) -> usize {
        self.bandit.num_arms()
    }

    fn pull(&mut self, action: usize) -> Result<f64, BanditError> {
        self.bandit.pull(action)
    }

    fn optimal_reward(&self) -> f64 {
        self.bandit.optimal_reward()
    }

    fn reset(&mut self) {
        self.bandit
            .probabilities
            .copy_from_slice(&self.initial_probabilities);
    }

    fn step(&mut self) {
        let BernoulliBandit { probabilities, rng } = &mut self.bandit;
        for p in probabilities.iter_mut() {
            let noise: f64 = rng.sample(StandardNormal);
            *p = (*p + self.drift_scale * noise).clamp(0.0, 1.0);
        }
    }
}

/// Configuration for a [`DriftingBernoulliBandit`] with uniformly sampled initial probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftingBernoulliBandits {
    pub num_arms: usize,
    /// Standard deviation of the per-step change in each arm probability.
    pub drift_scale: f64,
}

impl Default for DriftingBernoulliBandits {
    fn default() -> Self {
        Self {
            num_arms: 5,
            drift_scale: 0.01,
        }
    }
}

impl BuildEnv for DriftingBernoulliBandits {
    type Environment = DriftingBernoulliBandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        DriftingBernoulliBandit::new(
            BernoulliBandit::uniform(self.num_arms, rng)?,
            self.drift_scale,
        )
    }
}

#[cfg(test)]
mod bernoulli_bandit {
    use super::*;
    use rstest::rstest;

    fn bandit(probabilities: Vec<f64>) -> BernoulliBandit {
        BernoulliBandit::new(probabilities, Prng::seed_from_u64(0)).unwrap()
    }

    #[rstest]
    #[case(vec![0.2], 0.2)]
    #[case(vec![0.1, 0.9, 0.3], 0.9)]
    #[case(vec![0.0, 0.0], 0.0)]
    #[case(vec![1.0, 0.5, 1.0], 1.0)]
    #[allow(clippy::float_cmp)]
    fn optimal_reward_is_max(#[case] probabilities: Vec<f64>, #[case] expected: f64) {
        assert_eq!(bandit(probabilities).optimal_reward(), expected);
    }

    #[test]
    fn uniform_optimal_reward_is_max() {
        let mut rng = Prng::seed_from_u64(5);
        for num_arms in 1..10 {
            let env = BernoulliBandit::uniform(num_arms, &mut rng).unwrap();
            assert_eq!(env.num_arms(), num_arms);
            let max = env
                .probabilities()
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(env.probabilities().iter().all(|p| (0.0..1.0).contains(p)));
            assert!(env.optimal_reward().to_bits() == max.to_bits());
        }
    }

    #[test]
    fn rewards_are_zero_or_one() {
        let mut env = bandit(vec![0.3, 0.7]);
        for i in 0..1000 {
            let reward = env.pull(i % 2).unwrap();
            assert!(reward == 0.0 || reward == 1.0, "reward {}", reward);
        }
    }

    #[test]
    fn reward_rate_matches_probability() {
        let mut env = bandit(vec![0.25]);
        let n = 20_000;
        let total: f64 = (0..n).map(|_| env.pull(0).unwrap()).sum();
        assert!((total / n as f64 - 0.25).abs() < 0.015);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn certain_arms() {
        let mut env = bandit(vec![1.0, 0.0]);
        for _ in 0..100 {
            assert_eq!(env.pull(0).unwrap(), 1.0);
        }
    }

    #[test]
    fn out_of_range_pull_is_error() {
        let mut env = bandit(vec![0.5, 0.5]);
        assert_eq!(
            env.pull(2),
            Err(BanditError::InvalidAction {
                action: 2,
                num_arms: 2
            })
        );
    }

    #[test]
    fn no_arms_is_error() {
        assert_eq!(
            BernoulliBandit::new(vec![], Prng::seed_from_u64(0)),
            Err(BuildEnvError::NoArms)
        );
        let mut rng = Prng::seed_from_u64(0);
        assert_eq!(
            UniformBernoulliBandits::new(0).build_env(&mut rng),
            Err(BuildEnvError::NoArms)
        );
    }

    #[rstest]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn invalid_probability_is_error(#[case] probability: f64) {
        assert!(matches!(
            BernoulliBandit::new(vec![0.5, probability], Prng::seed_from_u64(0)),
            Err(BuildEnvError::InvalidProbability { arm: 1, .. })
        ));
    }

    #[test]
    fn reset_and_step_do_nothing() {
        let mut env = bandit(vec![0.1, 0.6]);
        env.step();
        env.reset();
        assert_eq!(env.probabilities(), &[0.1, 0.6]);
    }
}

#[cfg(test)]
mod drifting_bernoulli_bandit {
    use super::*;
    use crate::utils::stats::OnlineMeanVariance;

    fn drifting(drift_scale: f64) -> DriftingBernoulliBandit {
        let bandit = BernoulliBandit::new(vec![0.2, 0.5, 0.8], Prng::seed_from_u64(0)).unwrap();
        DriftingBernoulliBandit::new(bandit, drift_scale).unwrap()
    }

    #[test]
    fn step_moves_probabilities_within_bounds() {
        let mut env = drifting(0.2);
        for _ in 0..500 {
            env.step();
            assert!(env.probabilities().iter().all(|p| (0.0..=1.0).contains(p)));
        }
        assert_ne!(env.probabilities(), &[0.2, 0.5, 0.8]);
    }

    #[test]
    fn optimal_reward_tracks_current_probabilities() {
        let mut env = drifting(0.05);
        for _ in 0..20 {
            env.step();
            let max = env
                .probabilities()
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(env.optimal_reward().to_bits() == max.to_bits());
        }
    }

    #[test]
    fn reset_restores_initial_probabilities() {
        let mut env = drifting(0.1);
        for _ in 0..10 {
            env.step();
        }
        env.reset();
        assert_eq!(env.probabilities(), &[0.2, 0.5, 0.8]);
    }

    #[test]
    fn zero_drift_is_stationary() {
        let mut env = drifting(0.0);
        for _ in 0..10 {
            env.step();
        }
        assert_eq!(env.probabilities(), &[0.2, 0.5, 0.8]);
    }

    #[test]
    fn step_change_is_normal_with_drift_scale() {
        let bandit = BernoulliBandit::new(vec![0.5], Prng::seed_from_u64(0)).unwrap();
        let mut env = DriftingBernoulliBandit::new(bandit, 0.01).unwrap();
        let mut changes = OnlineMeanVariance::new();
        for _ in 0..5000 {
            env.step();
            changes.push(env.probabilities()[0] - 0.5);
            env.reset();
        }
        let mean = changes.mean().unwrap();
        let stddev = changes.stddev().unwrap();
        assert!(mean.abs() < 1e-3, "mean {}", mean);
        assert!((stddev - 0.01).abs() < 1e-3, "stddev {}", stddev);
    }

    #[test]
    fn invalid_drift_scale() {
        let bandit = BernoulliBandit::new(vec![0.5], Prng::seed_from_u64(0)).unwrap();
        assert_eq!(
            DriftingBernoulliBandit::new(bandit, -1.0),
            Err(BuildEnvError::InvalidDriftScale(-1.0))
        );
    }
}

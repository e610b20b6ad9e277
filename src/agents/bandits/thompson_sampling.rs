//! Thompson sampling bandit agent
use super::super::{check_num_arms, Agent, ArmCounts, BuildAgent, BuildAgentError};
use crate::utils::iter::argmax_f64;
use crate::Prng;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_distr::Beta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for [`BetaThompsonSamplingAgent`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetaThompsonSamplingAgentConfig;

impl BetaThompsonSamplingAgentConfig {
    pub const fn new() -> Self {
        Self
    }
}

impl BuildAgent for BetaThompsonSamplingAgentConfig {
    type Agent = BetaThompsonSamplingAgent;

    fn build_agent(&self, num_arms: usize, rng: &mut Prng) -> Result<Self::Agent, BuildAgentError> {
        BetaThompsonSamplingAgent::new(num_arms, Prng::seed_from_u64(rng.gen()))
    }
}

/// A Thompson sampling agent for Bernoulli rewards with a uniform `Beta(1, 1)` prior.
///
/// Each step draws one sample from the `Beta(successes + 1, failures + 1)` posterior of every
/// arm and pulls the arm with the largest sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaThompsonSamplingAgent {
    counts: ArmCounts,
    rng: Prng,
}

impl BetaThompsonSamplingAgent {
    pub fn new(num_arms: usize, rng: Prng) -> Result<Self, BuildAgentError> {
        check_num_arms(num_arms)?;
        Ok(Self {
            counts: ArmCounts::new(num_arms),
            rng,
        })
    }

    /// Posterior mean success probability of each arm.
    pub fn posterior_means(&self) -> Vec<f64> {
        self.counts
            .successes()
            .iter()
            .zip(self.counts.failures())
            .map(|(&s, &f)| (s + 1) as f64 / (s + f + 2) as f64)
            .collect()
    }
}

impl fmt::Display for BetaThompsonSamplingAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BetaThompsonSamplingAgent")
    }
}

impl Agent for BetaThompsonSamplingAgent {
    fn act(&mut self) -> usize {
        let rng = &mut self.rng;
        let samples = self
            .counts
            .successes()
            .iter()
            .zip(self.counts.failures())
            .map(|(&successes, &failures)| {
                Beta::new(successes as f64 + 1.0, failures as f64 + 1.0)
                    .expect("Beta shape parameters are at least 1")
                    .sample(&mut *rng)
            });
        argmax_f64(samples).expect("Empty action space")
    }

    fn counts(&self) -> &ArmCounts {
        &self.counts
    }

    fn counts_mut(&mut self) -> &mut ArmCounts {
        &mut self.counts
    }
}

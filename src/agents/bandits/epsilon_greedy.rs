//! Epsilon-greedy bandit agent.
use super::super::{check_num_arms, Agent, ArmCounts, BuildAgent, BuildAgentError};
use super::argmax_priority;
use crate::Prng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for an [`EpsilonGreedyAgent`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedyAgentConfig {
    /// Probability of taking a uniform random action instead of the greedy one.
    pub exploration_rate: f64,
}

impl EpsilonGreedyAgentConfig {
    pub const fn new(exploration_rate: f64) -> Self {
        Self { exploration_rate }
    }
}

impl Default for EpsilonGreedyAgentConfig {
    fn default() -> Self {
        Self::new(0.01)
    }
}

impl BuildAgent for EpsilonGreedyAgentConfig {
    type Agent = EpsilonGreedyAgent;

    fn build_agent(&self, num_arms: usize, rng: &mut Prng) -> Result<Self::Agent, BuildAgentError> {
        EpsilonGreedyAgent::new(
            num_arms,
            self.exploration_rate,
            Prng::seed_from_u64(rng.gen()),
        )
    }
}

/// Epsilon-greedy agent.
///
/// With probability `exploration_rate` pulls a uniformly random arm,
/// otherwise the arm with the highest empirical success rate.
/// Unpulled arms are preferred over any pulled arm when acting greedily.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonGreedyAgent {
    exploration_rate: f64,
    counts: ArmCounts,
    rng: Prng,
}

impl EpsilonGreedyAgent {
    pub fn new(num_arms: usize, exploration_rate: f64, rng: Prng) -> Result<Self, BuildAgentError> {
        check_num_arms(num_arms)?;
        if !(0.0..=1.0).contains(&exploration_rate) {
            return Err(BuildAgentError::InvalidExplorationRate(exploration_rate));
        }
        Ok(Self {
            exploration_rate,
            counts: ArmCounts::new(num_arms),
            rng,
        })
    }

    pub const fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// The arm with the highest empirical success rate.
    pub fn greedy_action(&self) -> usize {
        argmax_priority(&self.counts, |successes, pulls| {
            successes as f64 / pulls as f64
        })
    }
}

impl fmt::Display for EpsilonGreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EpsilonGreedyAgent(ε={})", self.exploration_rate)
    }
}

impl Agent for EpsilonGreedyAgent {
    fn act(&mut self) -> usize {
        if self.rng.gen::<f64>() < self.exploration_rate {
            self.rng.gen_range(0..self.counts.num_arms())
        } else {
            self.greedy_action()
        }
    }

    fn counts(&self) -> &ArmCounts {
        &self.counts
    }

    fn counts_mut(&mut self) -> &mut ArmCounts {
        &mut self.counts
    }
}

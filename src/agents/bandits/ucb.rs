//! Upper confidence bound bandit agent.
use super::super::{check_num_arms, Agent, ArmCounts, BuildAgent, BuildAgentError};
use super::argmax_priority;
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for a [`UCB1Agent`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UCB1AgentConfig;

impl UCB1AgentConfig {
    pub const fn new() -> Self {
        Self
    }
}

impl BuildAgent for UCB1AgentConfig {
    type Agent = UCB1Agent;

    fn build_agent(&self, num_arms: usize, _rng: &mut Prng) -> Result<Self::Agent, BuildAgentError> {
        UCB1Agent::new(num_arms)
    }
}

/// A UCB1 Agent (Auer 2002)
///
/// Pulls the arm maximizing `Q[k] + sqrt(2 ln(N) / n[k])`
/// where `Q[k]` is the empirical success rate of arm `k`, `n[k]` its number of pulls
/// and `N` the total number of pulls.
/// Arms that have not been pulled are taken first.
///
/// Action selection is deterministic given the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UCB1Agent {
    counts: ArmCounts,
}

impl UCB1Agent {
    pub fn new(num_arms: usize) -> Result<Self, BuildAgentError> {
        check_num_arms(num_arms)?;
        Ok(Self {
            counts: ArmCounts::new(num_arms),
        })
    }

    /// Upper confidence bound of each arm; infinite for unpulled arms.
    pub fn upper_bounds(&self) -> Vec<f64> {
        let log_squared_total = 2.0 * (self.counts.total_pulls() as f64).ln();
        (0..self.counts.num_arms())
            .map(|arm| match self.counts.empirical_mean(arm) {
                Some(mean) => mean + (log_squared_total / self.counts.pulls(arm) as f64).sqrt(),
                None => f64::INFINITY,
            })
            .collect()
    }
}

impl fmt::Display for UCB1Agent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UCB1Agent")
    }
}

impl Agent for UCB1Agent {
    fn act(&mut self) -> usize {
        // total_pulls >= pulls >= 1 whenever the formula is evaluated so ln is finite
        let log_squared_total = 2.0 * (self.counts.total_pulls() as f64).ln();
        argmax_priority(&self.counts, |successes, pulls| {
            let pulls = pulls as f64;
            successes as f64 / pulls + (log_squared_total / pulls).sqrt()
        })
    }

    fn counts(&self) -> &ArmCounts {
        &self.counts
    }

    fn counts_mut(&mut self) -> &mut ArmCounts {
        &mut self.counts
    }
}

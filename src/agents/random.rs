use super::{check_num_arms, Agent, ArmCounts, BuildAgent, BuildAgentError};
use crate::Prng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for [`RandomAgent`]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomAgentConfig;

impl RandomAgentConfig {
    pub const fn new() -> Self {
        Self
    }
}

impl BuildAgent for RandomAgentConfig {
    type Agent = RandomAgent;

    fn build_agent(&self, num_arms: usize, rng: &mut Prng) -> Result<Self::Agent, BuildAgentError> {
        RandomAgent::new(num_arms, Prng::seed_from_u64(rng.gen()))
    }
}

/// An agent that always acts uniformly at random.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAgent {
    counts: ArmCounts,
    rng: Prng,
}

impl RandomAgent {
    pub fn new(num_arms: usize, rng: Prng) -> Result<Self, BuildAgentError> {
        check_num_arms(num_arms)?;
        Ok(Self {
            counts: ArmCounts::new(num_arms),
            rng,
        })
    }
}

impl fmt::Display for RandomAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RandomAgent")
    }
}

impl Agent for RandomAgent {
    fn act(&mut self) -> usize {
        self.rng.gen_range(0..self.counts.num_arms())
    }

    fn counts(&self) -> &ArmCounts {
        &self.counts
    }

    fn counts_mut(&mut self) -> &mut ArmCounts {
        &mut self.counts
    }
}

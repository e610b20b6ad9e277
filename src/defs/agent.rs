use crate::agents::{
    Agent, BetaThompsonSamplingAgentConfig, BuildAgent, BuildAgentError,
    EpsilonGreedyAgentConfig, RandomAgentConfig, UCB1AgentConfig,
};
use crate::Prng;
use serde::{Deserialize, Serialize};

/// Agent definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AgentDef {
    /// An agent that selects actions uniformly at random.
    Random(RandomAgentConfig),
    /// Random action with some probability, otherwise the empirically best arm.
    EpsilonGreedy(EpsilonGreedyAgentConfig),
    /// UCB1 agent from Auer 2002
    UCB1(UCB1AgentConfig),
    /// Thompson sampling for Bernoulli rewards using Beta priors.
    BetaThompsonSampling(BetaThompsonSamplingAgentConfig),
}

impl AgentDef {
    /// One agent of each kind, using the given epsilon-greedy exploration rate.
    pub fn all_with_epsilon(exploration_rate: f64) -> Vec<Self> {
        vec![
            Self::Random(RandomAgentConfig),
            Self::EpsilonGreedy(EpsilonGreedyAgentConfig::new(exploration_rate)),
            Self::UCB1(UCB1AgentConfig),
            Self::BetaThompsonSampling(BetaThompsonSamplingAgentConfig),
        ]
    }
}

impl BuildAgent for AgentDef {
    type Agent = Box<dyn Agent>;

    fn build_agent(&self, num_arms: usize, rng: &mut Prng) -> Result<Self::Agent, BuildAgentError> {
        use AgentDef::*;
        let agent: Self::Agent = match self {
            Random(config) => Box::new(config.build_agent(num_arms, rng)?),
            EpsilonGreedy(config) => Box::new(config.build_agent(num_arms, rng)?),
            UCB1(config) => Box::new(config.build_agent(num_arms, rng)?),
            BetaThompsonSampling(config) => Box::new(config.build_agent(num_arms, rng)?),
        };
        Ok(agent)
    }
}

//! Bandit agents
mod bandits;
mod counts;
mod error;
mod random;
#[cfg(test)]
pub mod testing;

pub use bandits::{
    BetaThompsonSamplingAgent, BetaThompsonSamplingAgentConfig, EpsilonGreedyAgent,
    EpsilonGreedyAgentConfig, UCB1Agent, UCB1AgentConfig,
};
pub use counts::ArmCounts;
pub use error::BuildAgentError;
pub use random::{RandomAgent, RandomAgentConfig};

use crate::{BanditError, Prng};
use std::fmt;

/// A bandit agent: selects arms and learns from the observed rewards.
///
/// Every agent keeps [`ArmCounts`] of its own pulls.
/// Variants differ only in how [`Agent::act`] uses those counts.
///
/// The [`Display`](fmt::Display) form is a descriptive label of the agent and its parameters.
pub trait Agent: fmt::Display {
    /// Select the arm to pull next.
    fn act(&mut self) -> usize;

    /// Success and failure counts observed so far.
    fn counts(&self) -> &ArmCounts;

    /// Mutable access to the observation counts, for implementing [`Agent::update`] and
    /// [`Agent::reset`]. Other callers must not change the counts.
    #[doc(hidden)]
    fn counts_mut(&mut self) -> &mut ArmCounts;

    /// Number of arms the agent chooses between.
    fn num_arms(&self) -> usize {
        self.counts().num_arms()
    }

    /// Update the agent with the reward observed from pulling `action`.
    ///
    /// # Errors
    /// [`BanditError::InvalidAction`] if `action` is not one of the agent's arms.
    fn update(&mut self, action: usize, reward: f64) -> Result<(), BanditError> {
        self.counts_mut().update(action, reward)
    }

    /// Forget all observations and prepare for a bandit with `num_arms` arms.
    ///
    /// # Panics
    /// If `num_arms` is zero.
    fn reset(&mut self, num_arms: usize) {
        assert!(num_arms > 0, "agent must have at least one arm");
        self.counts_mut().reset(num_arms)
    }
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    fn act(&mut self) -> usize {
        T::act(self)
    }
    fn counts(&self) -> &ArmCounts {
        T::counts(self)
    }
    fn counts_mut(&mut self) -> &mut ArmCounts {
        T::counts_mut(self)
    }
    fn num_arms(&self) -> usize {
        T::num_arms(self)
    }
    fn update(&mut self, action: usize, reward: f64) -> Result<(), BanditError> {
        T::update(self, action, reward)
    }
    fn reset(&mut self, num_arms: usize) {
        T::reset(self, num_arms)
    }
}

/// Build an agent for a bandit with a given number of arms.
pub trait BuildAgent {
    type Agent: Agent;

    /// Build a new agent.
    ///
    /// # Args
    /// * `num_arms` - Number of arms of the bandit that the agent will act in.
    /// * `rng` - Random number generator for initializing the agent's own random state.
    fn build_agent(&self, num_arms: usize, rng: &mut Prng) -> Result<Self::Agent, BuildAgentError>;
}

/// Check that an agent can be built for `num_arms` arms.
fn check_num_arms(num_arms: usize) -> Result<(), BuildAgentError> {
    if num_arms == 0 {
        Err(BuildAgentError::NoArms)
    } else {
        Ok(())
    }
}

//! Multi-armed bandit agents.
//!
//! # Unpulled arms
//! The empirical mean of an arm that has never been pulled is `0/0` and the UCB1 bonus involves
//! `ln(0)` before any pulls. Agents that use these quantities give every unpulled arm infinite
//! priority instead. With first-index tie-breaking a fresh agent therefore pulls arms
//! `0, 1, ..., K-1` in order before its selection formula applies.
mod epsilon_greedy;
mod thompson_sampling;
mod ucb;

pub use epsilon_greedy::{EpsilonGreedyAgent, EpsilonGreedyAgentConfig};
pub use thompson_sampling::{BetaThompsonSamplingAgent, BetaThompsonSamplingAgentConfig};
pub use ucb::{UCB1Agent, UCB1AgentConfig};

use super::ArmCounts;
use crate::utils::iter::argmax_f64;

/// Arm with the highest priority, where unpulled arms have infinite priority.
///
/// `priority(successes, pulls)` is only called for arms with at least one pull.
/// Ties go to the lowest arm index.
///
/// # Panics
/// If there are no arms or `priority` returns NaN.
fn argmax_priority<F>(counts: &ArmCounts, mut priority: F) -> usize
where
    F: FnMut(u64, u64) -> f64,
{
    let priorities = counts
        .successes()
        .iter()
        .zip(counts.failures())
        .map(|(&successes, &failures)| match successes + failures {
            0 => f64::INFINITY,
            pulls => priority(successes, pulls),
        });
    argmax_f64(priorities).expect("Empty action space")
}

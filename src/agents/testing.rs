//! Agent testing utilities
use super::{Agent, ArmCounts};

/// Fraction of `num_samples` calls to `act` that selected each arm.
///
/// The agent is not updated between calls.
pub fn action_frequencies<A: Agent + ?Sized>(agent: &mut A, num_samples: usize) -> Vec<f64> {
    let mut counts = vec![0_usize; agent.num_arms()];
    for _ in 0..num_samples {
        counts[agent.act()] += 1;
    }
    counts
        .into_iter()
        .map(|c| c as f64 / num_samples as f64)
        .collect()
}

/// Replace the agent's observations with the given counts.
pub fn set_counts<A: Agent + ?Sized>(agent: &mut A, successes: Vec<u64>, failures: Vec<u64>) {
    *agent.counts_mut() = ArmCounts::from_counts(successes, failures);
}

/// Train the agent on a deterministic bandit where only `best_arm` pays out,
/// then return the fraction of the final `num_eval_steps` actions that chose it.
pub fn train_deterministic_bandit<A: Agent + ?Sized>(
    agent: &mut A,
    best_arm: usize,
    num_train_steps: usize,
    num_eval_steps: usize,
) -> f64 {
    for _ in 0..num_train_steps {
        let action = agent.act();
        let reward = if action == best_arm { 1.0 } else { 0.0 };
        agent.update(action, reward).unwrap();
    }
    let mut num_best = 0;
    for _ in 0..num_eval_steps {
        let action = agent.act();
        if action == best_arm {
            num_best += 1;
        }
        let reward = if action == best_arm { 1.0 } else { 0.0 };
        agent.update(action, reward).unwrap();
    }
    num_best as f64 / num_eval_steps as f64
}

//! Error type
use crate::agents::BuildAgentError;
use crate::envs::BuildEnvError;
use crate::logging::LogError;
use thiserror::Error;

/// Error from running a bandit simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error("action {action} is out of range for a bandit with {num_arms} arms")]
    InvalidAction { action: usize, num_arms: usize },
    #[error("experiment needs at least one agent, step and trial")]
    EmptyExperiment,
    #[error("error logging statistics")]
    Log(#[from] LogError),
}

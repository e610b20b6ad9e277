//! Agent errors
use thiserror::Error;

/// Error building an agent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildAgentError {
    #[error("bandit must have at least one arm")]
    NoArms,
    #[error("exploration rate {0} must be in [0, 1]")]
    InvalidExplorationRate(f64),
}

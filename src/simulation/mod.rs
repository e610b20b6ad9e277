//! Simulating agents in bandit environments
mod regret;
mod summary;

pub use regret::{run_regret_experiment, RegretExperimentConfig};
pub use summary::{RegretCurve, RegretCurves, RegretSummary};

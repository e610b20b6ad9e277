//! Multi-armed bandit simulation for comparing exploration strategies by cumulative regret.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::for_kv_map)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod agents;
pub mod defs;
pub mod envs;
mod error;
pub mod logging;
pub mod simulation;
pub mod utils;

pub use agents::{Agent, ArmCounts, BuildAgent};
pub use defs::{AgentDef, EnvDef};
pub use envs::{BuildEnv, Environment};
pub use error::BanditError;
pub use simulation::{RegretCurves, RegretExperimentConfig};

/// Pseudo-random number generator used by environments and agents.
pub type Prng = rand_chacha::ChaCha8Rng;

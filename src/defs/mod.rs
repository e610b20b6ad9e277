//! Definition structures
//!
//! These are tagged enums over the concrete configurations so that a set of heterogeneous
//! agents and environments can be described by plain data.
mod agent;
mod env;

pub use agent::AgentDef;
pub use env::EnvDef;

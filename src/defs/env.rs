use crate::envs::{
    BuildEnv, BuildEnvError, DriftingBernoulliBandits, Environment, UniformBernoulliBandits,
};
use crate::Prng;
use serde::{Deserialize, Serialize};

/// Environment definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnvDef {
    /// Bernoulli bandit with uniform random arm probabilities (sampled once on creation).
    UniformBernoulliBandit(UniformBernoulliBandits),
    /// Bernoulli bandit whose arm probabilities drift over time.
    DriftingBernoulliBandit(DriftingBernoulliBandits),
}

impl Default for EnvDef {
    fn default() -> Self {
        Self::UniformBernoulliBandit(UniformBernoulliBandits::default())
    }
}

impl BuildEnv for EnvDef {
    type Environment = Box<dyn Environment>;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        let env: Self::Environment = match self {
            Self::UniformBernoulliBandit(config) => Box::new(config.build_env(rng)?),
            Self::DriftingBernoulliBandit(config) => Box::new(config.build_env(rng)?),
        };
        Ok(env)
    }
}

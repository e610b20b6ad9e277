use bandit_regret::envs::{DriftingBernoulliBandits, UniformBernoulliBandits};
use bandit_regret::logging::{EveryNth, ProgressLogger, StatsLogger};
use bandit_regret::{
    AgentDef, BanditError, BuildAgent, BuildEnv, EnvDef, Prng, RegretCurves,
    RegretExperimentConfig,
};
use clap::{ArgEnum, Parser};
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use thiserror::Error;

#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "compare-agents",
    author,
    about = "Compare multi-armed bandit agents by their expected cumulative regret"
)]
pub struct Args {
    /// Number of bandit arms
    #[clap(short = 'k', long, default_value_t = 5)]
    pub num_arms: usize,

    /// Number of steps per trial
    #[clap(short = 'n', long, default_value_t = 10_000)]
    pub num_steps: usize,

    /// Number of trials to average over
    #[clap(long, default_value_t = 10)]
    pub num_trials: usize,

    /// Exploration rate of the epsilon-greedy agent
    #[clap(short, long, default_value_t = 0.01)]
    pub epsilon: f64,

    /// Per-step standard deviation of arm probability drift. Stationary arms if omitted.
    #[clap(long)]
    pub drift: Option<f64>,

    /// Random seed
    #[clap(long)]
    pub seed: Option<u64>,

    /// Suppress status output
    #[clap(short, long)]
    pub silent: bool,

    /// Output format
    #[clap(short, long, arg_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,
}

impl Args {
    fn config(&self) -> Config {
        let env = match self.drift {
            Some(drift_scale) => EnvDef::DriftingBernoulliBandit(DriftingBernoulliBandits {
                num_arms: self.num_arms,
                drift_scale,
            }),
            None => EnvDef::UniformBernoulliBandit(UniformBernoulliBandits::new(self.num_arms)),
        };
        Config {
            env,
            agents: AgentDef::all_with_epsilon(self.epsilon),
            experiment: RegretExperimentConfig::new(self.num_steps, self.num_trials),
            seed: self.seed.unwrap_or_else(|| rand::thread_rng().gen()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ArgEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub env: EnvDef,
    pub agents: Vec<AgentDef>,
    pub experiment: RegretExperimentConfig,
    pub seed: u64,
}

impl Config {
    fn run_experiment(&self, verbose: bool) -> Result<RegretCurves, CompareError> {
        let mut rng = Prng::seed_from_u64(self.seed);
        let mut env = self.env.build_env(&mut rng).map_err(BanditError::from)?;
        if verbose {
            println!("{}\n", env);
        }
        let num_arms = env.num_arms();
        let mut agents = self
            .agents
            .iter()
            .map(|def| def.build_agent(num_arms, &mut rng))
            .collect::<Result<Vec<_>, _>>()
            .map_err(BanditError::from)?;

        let mut logger: Box<dyn StatsLogger> = if verbose {
            Box::new(ProgressLogger::to_console(EveryNth::trials(1)))
        } else {
            Box::new(())
        };
        let curves = self
            .experiment
            .run(env.as_mut(), &mut agents, logger.as_mut())?;
        logger.flush();
        Ok(curves)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareData {
    pub config: Config,
    pub curves: RegretCurves,
}

/// Error running the agent comparison
#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error("error serializing results: {0}")]
    Json(#[from] serde_json::Error),
    #[error("error writing results: {0}")]
    Io(#[from] io::Error),
}

/// Write one row per step with the cumulative regret of each agent.
fn write_csv<W: Write>(mut out: W, curves: &RegretCurves) -> io::Result<()> {
    write!(out, "step")?;
    for curve in curves {
        write!(out, ",{}", curve.name)?;
    }
    writeln!(out)?;
    for step in 0..curves.num_steps() {
        write!(out, "{}", step + 1)?;
        for curve in curves {
            write!(out, ",{}", curve.cumulative_regret[step])?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn main() -> Result<(), CompareError> {
    let args = Args::parse();
    let config = args.config();
    let verbose = !args.silent && args.output == OutputFormat::Human;
    let curves = config.run_experiment(verbose)?;

    let data = CompareData { config, curves };
    match args.output {
        OutputFormat::Human => {
            println!("# Config\n{:#?}\n", data.config);
            println!("# Final Cumulative Regret");
            print!("{:.3}", data.curves.summary());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&data)?);
        }
        OutputFormat::Csv => {
            let stdout = io::stdout();
            write_csv(BufWriter::new(stdout.lock()), &data.curves)?;
        }
    }
    Ok(())
}

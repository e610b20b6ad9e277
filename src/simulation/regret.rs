//! Regret experiments: repeated trials of agents acting in a shared environment.
use super::summary::{RegretCurve, RegretCurves};
use crate::agents::Agent;
use crate::envs::Environment;
use crate::logging::{Id, Loggable, StatsLogger};
use crate::BanditError;
use serde::{Deserialize, Serialize};

/// Configuration of a regret experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegretExperimentConfig {
    /// Number of steps per trial.
    pub num_steps: usize,
    /// Number of independent trials to average over.
    pub num_trials: usize,
}

impl Default for RegretExperimentConfig {
    fn default() -> Self {
        Self::new(5000, 50)
    }
}

impl RegretExperimentConfig {
    pub const fn new(num_steps: usize, num_trials: usize) -> Self {
        Self {
            num_steps,
            num_trials,
        }
    }

    /// Run the experiment and return the expected cumulative regret curve of each agent.
    ///
    /// Every trial resets the environment and all agents. On each step the optimal reward is
    /// read once, then each agent in turn acts, pulls its arm and learns from the reward.
    /// Agents share the environment but see their own independent reward draws.
    ///
    /// Curves are indexed the same as `agents`.
    ///
    /// # Errors
    /// * [`BanditError::EmptyExperiment`] if there are no agents, steps or trials.
    /// * [`BanditError::InvalidAction`] if an agent selects an arm the environment does not have.
    /// * [`BanditError::Log`] if `logger` rejects a value, for example when it already holds
    ///   action histograms of a bandit with a different number of arms.
    pub fn run<E, A, L>(
        &self,
        env: &mut E,
        agents: &mut [A],
        logger: &mut L,
    ) -> Result<RegretCurves, BanditError>
    where
        E: Environment + ?Sized,
        A: Agent,
        L: StatsLogger + ?Sized,
    {
        if agents.is_empty() || self.num_steps == 0 || self.num_trials == 0 {
            return Err(BanditError::EmptyExperiment);
        }
        let num_arms = env.num_arms();
        let ids: Vec<_> = (0..agents.len())
            .map(|i| Id::new("agent").with(i.to_string()))
            .collect();

        // regret_sums[i][t]: regret of agent i at step t, summed over trials
        let mut regret_sums = vec![vec![0.0; self.num_steps]; agents.len()];
        let mut trial_regrets = vec![0.0; agents.len()];

        for _ in 0..self.num_trials {
            env.reset();
            for agent in agents.iter_mut() {
                agent.reset(num_arms);
            }
            trial_regrets.iter_mut().for_each(|r| *r = 0.0);
            logger.group_start();

            for step in 0..self.num_steps {
                let optimal_reward = env.optimal_reward();
                for (i, agent) in agents.iter_mut().enumerate() {
                    let action = agent.act();
                    let reward = env.pull(action)?;
                    agent.update(action, reward)?;

                    let regret = optimal_reward - reward;
                    regret_sums[i][step] += regret;
                    trial_regrets[i] += regret;
                    logger.group_log(
                        ids[i].clone().with("action"),
                        Loggable::Index {
                            value: action,
                            size: num_arms,
                        },
                    )?;
                }
                env.step();
            }

            for (id, &regret) in ids.iter().zip(&trial_regrets) {
                logger.group_log(id.clone().with("trial_regret"), regret.into())?;
            }
            logger.group_log(Id::new("trial"), Loggable::CounterIncrement(1))?;
            logger.group_end();
        }

        let num_trials = self.num_trials as f64;
        let curves = agents
            .iter()
            .zip(regret_sums)
            .map(|(agent, sums)| {
                let mut total = 0.0;
                let cumulative_regret = sums
                    .into_iter()
                    .map(|regret| {
                        total += regret;
                        total / num_trials
                    })
                    .collect();
                RegretCurve {
                    name: agent.to_string(),
                    cumulative_regret,
                }
            })
            .collect();
        Ok(RegretCurves::new(curves))
    }
}

/// Run a regret experiment without logging.
///
/// See [`RegretExperimentConfig::run`].
pub fn run_regret_experiment<E, A>(
    env: &mut E,
    agents: &mut [A],
    num_steps: usize,
    num_trials: usize,
) -> Result<RegretCurves, BanditError>
where
    E: Environment + ?Sized,
    A: Agent,
{
    RegretExperimentConfig::new(num_steps, num_trials).run(env, agents, &mut ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{ArmCounts, RandomAgent};
    use crate::envs::BernoulliBandit;
    use crate::logging::{testing::Reports, EveryNth, LogError, ProgressLogger, Stat};
    use crate::Prng;
    use rand::SeedableRng;
    use std::fmt;

    /// Agent that always pulls the same arm.
    struct FixedAgent {
        arm: usize,
        counts: ArmCounts,
    }

    impl FixedAgent {
        fn new(arm: usize) -> Self {
            Self {
                arm,
                counts: ArmCounts::default(),
            }
        }
    }

    impl fmt::Display for FixedAgent {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "FixedAgent({})", self.arm)
        }
    }

    impl Agent for FixedAgent {
        fn act(&mut self) -> usize {
            self.arm
        }
        fn counts(&self) -> &ArmCounts {
            &self.counts
        }
        fn counts_mut(&mut self) -> &mut ArmCounts {
            &mut self.counts
        }
    }

    /// Environment whose best arm gets better every step; records hook calls.
    #[derive(Default)]
    struct RisingEnv {
        optimal: f64,
        resets: usize,
        steps: usize,
    }

    impl fmt::Display for RisingEnv {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "RisingEnv")
        }
    }

    impl Environment for RisingEnv {
        fn num_arms(&self) -> usize {
            2
        }
        fn pull(&mut self, action: usize) -> Result<f64, BanditError> {
            match action {
                0 => Ok(0.0),
                1 => Ok(1.0),
                _ => Err(BanditError::InvalidAction {
                    action,
                    num_arms: 2,
                }),
            }
        }
        fn optimal_reward(&self) -> f64 {
            self.optimal
        }
        fn reset(&mut self) {
            self.resets += 1;
            self.optimal = 1.0;
        }
        fn step(&mut self) {
            self.steps += 1;
            self.optimal += 1.0;
        }
    }

    fn certain_bandit() -> BernoulliBandit {
        BernoulliBandit::new(vec![1.0, 0.0], Prng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn fixed_agents_exact_regret() {
        let mut env = certain_bandit();
        let mut agents = [FixedAgent::new(0), FixedAgent::new(1)];
        let curves = run_regret_experiment(&mut env, &mut agents, 4, 3).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].name, "FixedAgent(0)");
        assert_eq!(curves[0].cumulative_regret, vec![0.0; 4]);
        assert_eq!(curves[1].cumulative_regret, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn optimal_reward_read_once_per_step_and_hooks_called() {
        let mut env = RisingEnv::default();
        // Both agents are compared against the same per-step optimum
        let mut agents = [FixedAgent::new(1), FixedAgent::new(1)];
        let curves = run_regret_experiment(&mut env, &mut agents, 3, 2).unwrap();
        // Optimum is 1, 2, 3 over the steps; reward is always 1
        assert_eq!(curves[0].cumulative_regret, vec![0.0, 1.0, 3.0]);
        assert_eq!(curves[1].cumulative_regret, curves[0].cumulative_regret);
        assert_eq!(env.resets, 2);
        assert_eq!(env.steps, 6);
    }

    #[test]
    fn agents_reset_each_trial() {
        let mut env = certain_bandit();
        let mut agents = [FixedAgent::new(0)];
        let _ = run_regret_experiment(&mut env, &mut agents, 7, 5).unwrap();
        assert_eq!(agents[0].counts().num_arms(), 2);
        assert_eq!(agents[0].counts().total_pulls(), 7);
    }

    #[test]
    fn invalid_action_is_error() {
        let mut env = certain_bandit();
        let mut agents = [FixedAgent::new(2)];
        assert_eq!(
            run_regret_experiment(&mut env, &mut agents, 1, 1),
            Err(BanditError::InvalidAction {
                action: 2,
                num_arms: 2
            })
        );
    }

    #[test]
    fn empty_experiment_is_error() {
        let mut env = certain_bandit();
        let mut none: [FixedAgent; 0] = [];
        assert_eq!(
            run_regret_experiment(&mut env, &mut none, 10, 10),
            Err(BanditError::EmptyExperiment)
        );
        let mut agents = [FixedAgent::new(0)];
        assert_eq!(
            run_regret_experiment(&mut env, &mut agents, 0, 10),
            Err(BanditError::EmptyExperiment)
        );
        assert_eq!(
            run_regret_experiment(&mut env, &mut agents, 10, 0),
            Err(BanditError::EmptyExperiment)
        );
    }

    #[test]
    fn random_agent_regret_non_decreasing() {
        // With a certain best arm every reward is at most the optimal reward
        let mut env = BernoulliBandit::new(vec![0.5, 1.0, 0.0], Prng::seed_from_u64(1)).unwrap();
        let mut agents = [RandomAgent::new(3, Prng::seed_from_u64(2)).unwrap()];
        let curves = run_regret_experiment(&mut env, &mut agents, 200, 3).unwrap();
        let regret = &curves[0].cumulative_regret;
        assert!(regret.windows(2).all(|w| w[1] >= w[0]));
        for step in curves[0].step_regret() {
            assert!((-1e-9..=1.0 + 1e-9).contains(&step), "step {}", step);
        }
    }

    #[test]
    fn logs_each_trial() {
        let mut env = certain_bandit();
        let mut agents = [FixedAgent::new(1)];
        let mut logger = ProgressLogger::new(EveryNth::trials(1), Reports::default());
        RegretExperimentConfig::new(5, 2)
            .run(&mut env, &mut agents, &mut logger)
            .unwrap();

        let reports = &logger.writer().0;
        assert_eq!(reports.len(), 2);
        let ids: Vec<_> = reports[1].iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["agent/0/action", "agent/0/trial_regret", "trial"]);
        assert_eq!(reports[1][0].1, Stat::Histogram(vec![0, 5]));
        match &reports[1][1].1 {
            Stat::Mean(stats) => assert_eq!(stats.mean(), Some(5.0)),
            s => panic!("unexpected summary {:?}", s),
        }
        assert_eq!(reports[1][2].1, Stat::Count { total: 2, recent: 1 });
    }

    #[test]
    fn logger_reused_with_other_arm_count_is_error() {
        let mut logger = ProgressLogger::new(EveryNth::trials(1), Reports::default());
        let mut agents = [FixedAgent::new(0)];
        RegretExperimentConfig::new(3, 1)
            .run(&mut certain_bandit(), &mut agents, &mut logger)
            .unwrap();

        let mut wider = BernoulliBandit::new(vec![1.0, 0.0, 0.5], Prng::seed_from_u64(0)).unwrap();
        assert_eq!(
            RegretExperimentConfig::new(3, 1).run(&mut wider, &mut agents, &mut logger),
            Err(BanditError::Log(LogError::IncompatibleIndexSize { prev: 2, now: 3 }))
        );
    }
}

//! Benchmark `Agent::act` and full experiment steps for each agent.
use bandit_regret::agents::{
    Agent, BetaThompsonSamplingAgentConfig, BuildAgent, EpsilonGreedyAgentConfig,
    RandomAgentConfig, UCB1AgentConfig,
};
use bandit_regret::envs::{BernoulliBandit, Environment};
use bandit_regret::{AgentDef, Prng, RegretExperimentConfig};
use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use rand::SeedableRng;

const NUM_ARMS: usize = 10;

/// Benchmark `Agent::act` interleaved with updates from a Bernoulli bandit.
fn benchmark_agent_act<M, TC>(group: &mut BenchmarkGroup<M>, name: &str, agent_config: &TC)
where
    M: Measurement,
    TC: BuildAgent,
{
    let mut rng = Prng::seed_from_u64(0);
    let mut env = BernoulliBandit::uniform(NUM_ARMS, &mut rng).unwrap();
    let mut agent = agent_config.build_agent(NUM_ARMS, &mut rng).unwrap();
    group.bench_function(name, |b| {
        b.iter(|| {
            let action = agent.act();
            // Updating gives the agent varying counts; it should be fast relative to act
            let reward = env.pull(action).unwrap();
            agent.update(action, reward).unwrap();
        })
    });
}

fn bench_agents_act(c: &mut Criterion) {
    let mut group = c.benchmark_group("agents_act");
    benchmark_agent_act(&mut group, "random", &RandomAgentConfig);
    benchmark_agent_act(
        &mut group,
        "epsilon_greedy",
        &EpsilonGreedyAgentConfig::default(),
    );
    benchmark_agent_act(&mut group, "ucb1", &UCB1AgentConfig);
    benchmark_agent_act(
        &mut group,
        "beta_thompson_sampling",
        &BetaThompsonSamplingAgentConfig,
    );
}

fn bench_experiment(c: &mut Criterion) {
    let config = RegretExperimentConfig::new(1000, 1);
    c.bench_function("regret_experiment_all_agents", |b| {
        let mut rng = Prng::seed_from_u64(1);
        let mut env = BernoulliBandit::uniform(5, &mut rng).unwrap();
        let mut agents: Vec<_> = AgentDef::all_with_epsilon(0.01)
            .iter()
            .map(|def| def.build_agent(5, &mut rng).unwrap())
            .collect();
        b.iter(|| config.run(&mut env, &mut agents, &mut ()).unwrap())
    });
}

criterion_group!(benches, bench_agents_act, bench_experiment);
criterion_main!(benches);

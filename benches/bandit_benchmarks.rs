use banditsim::policies::{Policy, PolicyConfig, Softmax, ThompsonSampling, Ucb1};
use banditsim::{Agent, ArmStatistics, Environment};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use std::hint::black_box;

fn environment(n_arms: usize) -> Environment {
    let probabilities = (0..n_arms).map(|i| (i + 1) as f64 / (n_arms + 1) as f64).collect();
    Environment::new(probabilities, vec![1.0; n_arms]).unwrap()
}

fn trained_stats(n_arms: usize) -> ArmStatistics {
    let arm_order: Vec<usize> = (0..1000).map(|i| i % n_arms).collect();
    let rewards: Vec<f64> = (0..1000).map(|i| (i % 3) as f64 / 2.0).collect();
    ArmStatistics::replay(n_arms, &arm_order, &rewards).unwrap()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for n_arms in [5, 50, 500].iter() {
        let stats = trained_stats(*n_arms);

        group.bench_with_input(BenchmarkId::new("softmax", n_arms), n_arms, |b, _| {
            let policy = Softmax::new(0.1).unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            b.iter(|| black_box(policy.select(&stats, 1001, &mut rng).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("ucb1", n_arms), n_arms, |b, _| {
            let policy = Ucb1::new();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            b.iter(|| black_box(policy.select(&stats, 1001, &mut rng).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("thompson", n_arms), n_arms, |b, &n| {
            let policy = ThompsonSampling::new(n);
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            b.iter(|| black_box(policy.select(&stats, 1001, &mut rng).unwrap()));
        });
    }

    group.finish();
}

fn bench_act(c: &mut Criterion) {
    let mut group = c.benchmark_group("act");
    let policies = [
        PolicyConfig::Random,
        PolicyConfig::EpsilonGreedy { epsilon: 0.1 },
        PolicyConfig::EpsilonDecreasing {
            epsilon: 0.5,
            decay: 0.1,
            decay_interval: 100,
        },
        PolicyConfig::EpsilonFirst { exploration: 100 },
        PolicyConfig::Softmax { tau: 0.1 },
        PolicyConfig::Ucb1,
        PolicyConfig::thompson_sampling(),
    ];

    for iterations in [1000, 10_000].iter() {
        for policy in &policies {
            let agent = Agent::new(environment(5), *iterations, policy.clone()).unwrap();
            let name = agent.policy().build(5).unwrap().name();

            group.bench_with_input(BenchmarkId::new(name, iterations), iterations, |b, _| {
                let mut rng = rand::rngs::StdRng::seed_from_u64(42);
                b.iter(|| black_box(agent.act_with_rng(&mut rng).unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_selection, bench_act);
criterion_main!(benches);

use banditsim::prelude::*;
use rand::SeedableRng;

fn main() {
    println!("banditsim: Policy Comparison\n");
    println!("{}", "=".repeat(60));

    // Five arms, each paying its index with probability 0.2
    let probabilities = vec![0.2, 0.2, 0.2, 0.2, 0.2];
    let rewards = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let env = Environment::new(probabilities, rewards).unwrap();

    println!("Expected reward per arm:");
    for (arm, expected) in env.expected_rewards().iter().enumerate() {
        println!("  Arm {}: {:.2}", arm, expected);
    }
    println!("\nBest arm: Arm {}\n", env.best_arm());
    println!("{}", "=".repeat(60));

    let iterations = 1000;
    let policies = vec![
        ("Random", PolicyConfig::Random),
        ("Epsilon-Greedy (ε=0.1)", PolicyConfig::EpsilonGreedy { epsilon: 0.1 }),
        (
            "Epsilon-Decreasing (ε=0.5, decay=0.1/100)",
            PolicyConfig::EpsilonDecreasing {
                epsilon: 0.5,
                decay: 0.1,
                decay_interval: 100,
            },
        ),
        ("Epsilon-First (100)", PolicyConfig::EpsilonFirst { exploration: 100 }),
        ("Softmax (τ=0.2)", PolicyConfig::Softmax { tau: 0.2 }),
        ("UCB1", PolicyConfig::Ucb1),
        ("Thompson Sampling", PolicyConfig::thompson_sampling()),
    ];

    // Independent runs share nothing but the agent, so they can run side by side
    let results: Vec<(&str, LearningSummary)> = std::thread::scope(|scope| {
        let handles: Vec<_> = policies
            .into_iter()
            .enumerate()
            .map(|(seed, (label, policy))| {
                let agent = Agent::new(env.clone(), iterations, policy).unwrap();
                scope.spawn(move || {
                    let mut rng = rand::rngs::StdRng::seed_from_u64(seed as u64);
                    (label, agent.act_with_rng(&mut rng).unwrap())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (label, summary) in &results {
        println!("\n{}", label);
        println!("{}", "-".repeat(label.chars().count()));
        println!("  Total reward: {:.1}", summary.total_reward());
        println!("  Average reward: {:.3}", summary.mean_reward());
        println!("  Arm selection counts:");
        for (arm, (count, share)) in summary
            .arm
            .counts()
            .iter()
            .zip(summary.selection_share())
            .enumerate()
        {
            println!("    Arm {}: {} ({:.1}%)", arm, count, share * 100.0);
        }
        println!("  Final estimates:");
        for (arm, q) in summary.q_values.iter().enumerate() {
            println!("    Arm {}: {:.3}", arm, q);
        }
    }

    println!("\n{}", "=".repeat(60));
}

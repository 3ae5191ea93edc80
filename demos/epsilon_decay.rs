use banditsim::SimulationConfig;

const CONFIG: &str = r#"{
    "reward_probabilities": [0.2, 0.4, 0.6, 0.8],
    "rewards": [1, 1, 1, 1],
    "iterations": 500,
    "policy": {"kind": "epsilon_decreasing", "epsilon": 0.9, "decay": 0.2, "decay_interval": 50},
    "seed": 7
}"#;

fn main() {
    let config = SimulationConfig::from_json_str(CONFIG).unwrap();
    let summary = config.run().unwrap();

    println!("Epsilon trace (every 50 iterations):");
    let epsilons = summary.epsilons_rounded(3).unwrap_or_default();
    for (iteration, epsilon) in epsilons.iter().enumerate().step_by(50) {
        println!("  iteration {:>3}: ε = {:.3}", iteration, epsilon);
    }

    println!("\nArm counts: {:?}", summary.arm.counts());
    println!("Best estimated arm: {:?}", summary.best_arm());
    println!(
        "\n{}",
        serde_json::to_string_pretty(&summary.q_values).unwrap()
    );
}

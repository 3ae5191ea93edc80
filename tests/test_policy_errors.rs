//! Tests for configuration error handling

use banditsim::policies::{Policy, PolicyConfig, Softmax, ThompsonSampling, Ucb1};
use banditsim::{Agent, ArmStatistics, BanditError, Environment, SimulationConfig};
use rand::SeedableRng;

fn env() -> Environment {
    Environment::new(vec![0.5, 0.5], vec![1.0, 1.0]).unwrap()
}

fn is_invalid<T>(result: banditsim::Result<T>) -> bool {
    matches!(result, Err(BanditError::InvalidConfiguration { .. }))
}

#[test]
fn test_environment_errors() {
    assert!(is_invalid(Environment::new(vec![], vec![])));
    assert!(is_invalid(Environment::new(vec![0.5, 0.5], vec![1.0])));
    assert!(is_invalid(Environment::new(vec![0.5, 1.01], vec![1.0, 1.0])));

    let err = Environment::new(vec![0.5], vec![1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("mismatched dimensions"));
}

#[test]
fn test_agent_parameter_errors() {
    assert!(is_invalid(Agent::ucb1(env(), 0)));
    assert!(is_invalid(Agent::epsilon_greedy(env(), 10, -0.5)));
    assert!(is_invalid(Agent::epsilon_decreasing(env(), 10, 0.5, 1.5, 10)));
    assert!(is_invalid(Agent::epsilon_decreasing(env(), 10, 1.5, 0.5, 10)));
    assert!(is_invalid(Agent::softmax(env(), 10, 0.0)));
    assert!(is_invalid(Agent::softmax(env(), 10, f64::NAN)));
    assert!(is_invalid(Agent::new(
        env(),
        10,
        PolicyConfig::ThompsonSampling {
            prior_alpha: 0.0,
            prior_beta: 1.0
        }
    )));
}

#[test]
fn test_selection_without_arms_fails() {
    let empty = ArmStatistics::new(0);
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let policies: Vec<Box<dyn Policy>> = vec![
        Box::new(Softmax::new(1.0).unwrap()),
        Box::new(Ucb1::new()),
        Box::new(ThompsonSampling::new(0)),
    ];
    for policy in policies {
        assert!(is_invalid(policy.select(&empty, 1, &mut rng)), "{}", policy.name());
    }

    for config in [
        PolicyConfig::Random,
        PolicyConfig::EpsilonGreedy { epsilon: 0.5 },
        PolicyConfig::EpsilonFirst { exploration: 3 },
    ] {
        let policy = config.build(0).unwrap();
        assert!(is_invalid(policy.select(&empty, 1, &mut rng)));
    }
}

#[test]
fn test_config_errors() {
    let err = SimulationConfig::from_json_str(r#"{"policy": {"kind": "nope"}}"#).unwrap_err();
    assert!(matches!(err, BanditError::Config { .. }));

    let config = SimulationConfig::from_json_str(
        r#"{
            "reward_probabilities": [0.5, 2.0],
            "rewards": [1, 1],
            "iterations": 10,
            "policy": {"kind": "random"}
        }"#,
    )
    .unwrap();
    assert!(is_invalid(config.run()));
}

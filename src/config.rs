//! Declarative simulation setup, loadable from JSON.

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::environment::Environment;
use crate::error::Result;
use crate::policies::PolicyConfig;
use crate::summary::LearningSummary;

/// Everything needed to run one simulation.
///
/// # Examples
///
/// ```
/// use banditsim::SimulationConfig;
///
/// let config = SimulationConfig::from_json_str(r#"{
///     "reward_probabilities": [0.2, 0.2, 0.2, 0.2, 0.2],
///     "rewards": [0, 1, 2, 3, 4],
///     "iterations": 1000,
///     "policy": {"kind": "epsilon_greedy", "epsilon": 0.1},
///     "seed": 42
/// }"#).unwrap();
///
/// let summary = config.run().unwrap();
/// assert_eq!(summary.iterations(), 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub reward_probabilities: Vec<f64>,
    pub rewards: Vec<f64>,
    pub iterations: usize,
    pub policy: PolicyConfig,
    /// Seed for a reproducible run; the thread rng is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every part of the config and builds the agent.
    pub fn build_agent(&self) -> Result<Agent> {
        let environment =
            Environment::new(self.reward_probabilities.clone(), self.rewards.clone())?;
        Agent::new(environment, self.iterations, self.policy.clone())
    }

    pub fn run(&self) -> Result<LearningSummary> {
        let agent = self.build_agent()?;
        match self.seed {
            Some(seed) => agent.act_with_rng(&mut rand::rngs::StdRng::seed_from_u64(seed)),
            None => agent.act(),
        }
    }
}

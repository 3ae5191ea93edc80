//! Arm-selection strategies.
//!
//! Each strategy lives in its own module and implements [`Policy`].
//! [`PolicyConfig`] is the closed set of strategies with their parameters; it
//! is what agents and config files carry, and it builds fresh policy state
//! for every run.

mod epsilon_decreasing;
mod epsilon_first;
mod epsilon_greedy;
mod random;
mod softmax;
mod thompson;
mod ucb;

use serde::{Deserialize, Serialize};

pub use crate::policy::Policy;
pub use epsilon_decreasing::EpsilonDecreasing;
pub use epsilon_first::EpsilonFirst;
pub use epsilon_greedy::EpsilonGreedy;
pub use random::Random;
pub use softmax::Softmax;
pub use thompson::ThompsonSampling;
pub use ucb::{CONFIDENCE_EPSILON, Ucb1};

use crate::error::Result;

fn default_prior() -> f64 {
    1.0
}

/// Policy kind plus the parameters that kind needs.
///
/// Serialized with a `kind` tag, e.g.
/// `{"kind": "epsilon_decreasing", "epsilon": 0.5, "decay": 0.1, "decay_interval": 100}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    Random,
    EpsilonGreedy {
        epsilon: f64,
    },
    EpsilonDecreasing {
        epsilon: f64,
        decay: f64,
        decay_interval: usize,
    },
    EpsilonFirst {
        exploration: usize,
    },
    Softmax {
        tau: f64,
    },
    Ucb1,
    ThompsonSampling {
        #[serde(default = "default_prior")]
        prior_alpha: f64,
        #[serde(default = "default_prior")]
        prior_beta: f64,
    },
}

impl PolicyConfig {
    /// Thompson Sampling with the uniform prior.
    pub fn thompson_sampling() -> Self {
        PolicyConfig::ThompsonSampling {
            prior_alpha: 1.0,
            prior_beta: 1.0,
        }
    }

    /// Checks the parameters without building anything.
    pub fn validate(&self) -> Result<()> {
        self.build(0).map(|_| ())
    }

    /// Builds fresh policy state for a run over `arm_count` arms.
    pub fn build(&self, arm_count: usize) -> Result<Box<dyn Policy>> {
        let policy: Box<dyn Policy> = match *self {
            PolicyConfig::Random => Box::new(Random),
            PolicyConfig::EpsilonGreedy { epsilon } => Box::new(EpsilonGreedy::new(epsilon)?),
            PolicyConfig::EpsilonDecreasing {
                epsilon,
                decay,
                decay_interval,
            } => Box::new(EpsilonDecreasing::new(epsilon, decay, decay_interval)?),
            PolicyConfig::EpsilonFirst { exploration } => Box::new(EpsilonFirst::new(exploration)),
            PolicyConfig::Softmax { tau } => Box::new(Softmax::new(tau)?),
            PolicyConfig::Ucb1 => Box::new(Ucb1::new()),
            PolicyConfig::ThompsonSampling {
                prior_alpha,
                prior_beta,
            } => Box::new(ThompsonSampling::with_prior(
                arm_count,
                prior_alpha,
                prior_beta,
            )?),
        };
        Ok(policy)
    }
}

//! banditsim: a multi-armed bandit simulation engine.
//!
//! An [`Environment`] pays each arm's reward with a fixed probability. An
//! [`Agent`] pairs an environment with an iteration budget and one of seven
//! arm-selection policies, runs the loop to completion and returns a
//! [`LearningSummary`] with counts, rewards, value estimates and any
//! policy-specific diagnostics.
//!
//! # Quick Start
//!
//! ```
//! use banditsim::{Agent, Environment};
//! use rand::SeedableRng;
//!
//! let env = Environment::new(vec![0.1, 0.5, 0.9], vec![1.0, 1.0, 1.0]).unwrap();
//! let agent = Agent::ucb1(env, 500).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let summary = agent.act_with_rng(&mut rng).unwrap();
//!
//! assert_eq!(summary.arm.total_pulls(), 500);
//! assert_eq!(summary.confidence_intervals.as_ref().unwrap().len(), 500);
//! ```

mod agent;
mod arm;
mod config;
mod environment;
mod error;
pub mod policies;
mod policy;
mod summary;

pub use agent::Agent;
pub use arm::{ArmStatistics, argmax};
pub use config::SimulationConfig;
pub use environment::Environment;
pub use error::{BanditError, Result};
pub use summary::{ConfidenceInterval, Diagnostics, LearningSummary};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditsim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{
        EpsilonDecreasing, EpsilonFirst, EpsilonGreedy, Policy, PolicyConfig, Random, Softmax,
        ThompsonSampling, Ucb1,
    };
    pub use crate::{
        Agent, ArmStatistics, BanditError, Environment, LearningSummary, Result, SimulationConfig,
    };
}

use rand::Rng;

use crate::arm::{ArmStatistics, argmax};
use crate::error::Result;
use crate::policy::{Policy, check_unit_interval, require_arms, uniform_arm};

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    pub fn new(epsilon: f64) -> Result<Self> {
        check_unit_interval("epsilon", epsilon)?;
        Ok(Self { epsilon })
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// One epsilon-greedy decision, shared by the fixed and decaying variants.
///
/// A draw below `epsilon` explores, so `epsilon = 0` always exploits and
/// `epsilon = 1` always explores.
pub(crate) fn explore_or_exploit(
    epsilon: f64,
    stats: &ArmStatistics,
    rng: &mut dyn rand::RngCore,
) -> Result<usize> {
    let n = require_arms(stats)?;
    let r: f64 = rng.random();
    if r < epsilon {
        Ok(uniform_arm(n, rng))
    } else {
        Ok(argmax(stats.q_values()).unwrap_or(0))
    }
}

impl Policy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        _iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        explore_or_exploit(self.epsilon, stats, rng)
    }
}

use rand::Rng;
use tracing::event;

use crate::arm::ArmStatistics;
use crate::error::Result;
use crate::policy::{Policy, check_positive, require_arms, uniform_arm};

/// Boltzmann exploration: arms are sampled in proportion to `exp(q / tau)`.
///
/// Small temperatures approach greedy selection, large ones approach uniform.
#[derive(Clone, Debug)]
pub struct Softmax {
    tau: f64,
}

impl Softmax {
    pub fn new(tau: f64) -> Result<Self> {
        check_positive("tau", tau)?;
        Ok(Self { tau })
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Selection probability of each arm under the current estimates.
    pub fn probabilities(&self, q_values: &[f64]) -> Vec<f64> {
        // shifting by the max leaves the distribution unchanged
        let max = q_values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = q_values
            .iter()
            .map(|q| ((q - max) / self.tau).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|w| w / total).collect()
    }
}

impl Policy for Softmax {
    fn name(&self) -> &'static str {
        "softmax"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        _iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        let n = require_arms(stats)?;
        let threshold: f64 = rng.random();

        let mut cumulative = 0.0;
        for (arm, p) in self.probabilities(stats.q_values()).into_iter().enumerate() {
            cumulative += p;
            if cumulative > threshold {
                return Ok(arm);
            }
        }

        event!(
            tracing::Level::WARN,
            threshold,
            cumulative,
            "softmax distribution did not cover the draw, falling back to uniform"
        );
        Ok(uniform_arm(n, rng))
    }
}

use crate::arm::{ArmStatistics, argmax};
use crate::error::Result;
use crate::policy::{Policy, require_arms};
use crate::summary::{ConfidenceInterval, Diagnostics};

/// Guard added to denominators so unpulled arms never divide by zero.
pub const CONFIDENCE_EPSILON: f64 = 1e-7;

/// Upper Confidence Bound (UCB1) policy
///
/// Picks the arm maximising `q + sqrt(2 ln t / (1 + n))`. Arms that have
/// never been pulled are taken first, lowest index first, so every arm is
/// tried within the first `arm_count` iterations whatever the reward scale.
///
/// After every iteration the policy records a confidence band per arm,
/// `mean ± sqrt(3 ln t / (2 n + ε))` with `mean = total / (n + ε)`.
#[derive(Clone, Debug, Default)]
pub struct Ucb1 {
    confidence_intervals: Vec<Vec<ConfidenceInterval>>,
}

impl Ucb1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exploration-adjusted score of every arm at `iteration`.
    pub fn scores(stats: &ArmStatistics, iteration: usize) -> Vec<f64> {
        let ln_t = (iteration.max(1) as f64).ln();
        stats
            .q_values()
            .iter()
            .zip(stats.counts())
            .map(|(&q, &n)| {
                if n == 0 {
                    f64::INFINITY
                } else {
                    q + (2.0 * ln_t / (1.0 + n as f64)).sqrt()
                }
            })
            .collect()
    }

    /// Confidence band of every arm at `iteration`.
    pub fn confidence_bands(stats: &ArmStatistics, iteration: usize) -> Vec<ConfidenceInterval> {
        let ln_t = (iteration.max(1) as f64).ln();
        stats
            .cumulative_rewards()
            .iter()
            .zip(stats.counts())
            .map(|(&total, &n)| {
                let n = n as f64;
                let mean = total / (n + CONFIDENCE_EPSILON);
                let half_width = (3.0 * ln_t / (2.0 * n + CONFIDENCE_EPSILON)).sqrt();
                ConfidenceInterval {
                    min: mean - half_width,
                    max: mean + half_width,
                }
            })
            .collect()
    }

    pub fn confidence_intervals(&self) -> &[Vec<ConfidenceInterval>] {
        &self.confidence_intervals
    }
}

impl Policy for Ucb1 {
    fn name(&self) -> &'static str {
        "ucb1"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        iteration: usize,
        _rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        require_arms(stats)?;
        Ok(argmax(&Self::scores(stats, iteration)).unwrap_or(0))
    }

    fn update(&mut self, _arm: usize, _reward: f64, stats: &ArmStatistics, iteration: usize) {
        self.confidence_intervals
            .push(Self::confidence_bands(stats, iteration));
    }

    fn into_diagnostics(self: Box<Self>) -> Diagnostics {
        Diagnostics {
            epsilons: None,
            confidence_intervals: Some(self.confidence_intervals),
        }
    }
}

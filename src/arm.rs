//! Per-arm running aggregates shared by every policy.
//!
//! The simulation loop owns one [`ArmStatistics`] per run and hands policies a
//! shared reference when asking for a decision.

use serde::{Deserialize, Serialize};

use crate::error::{BanditError, Result};

/// Pull counts, reward totals and mean-reward estimates for each arm.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmStatistics {
    counts: Vec<u64>,
    cumulative_rewards: Vec<f64>,
    q_values: Vec<f64>,
}

impl ArmStatistics {
    /// Creates zeroed statistics for `arm_count` arms.
    pub fn new(arm_count: usize) -> Self {
        Self {
            counts: vec![0; arm_count],
            cumulative_rewards: vec![0.0; arm_count],
            q_values: vec![0.0; arm_count],
        }
    }

    /// Rebuilds statistics by replaying a pull history.
    pub fn replay(arm_count: usize, arm_order: &[usize], rewards: &[f64]) -> Result<Self> {
        if arm_order.len() != rewards.len() {
            return Err(BanditError::invalid(format!(
                "mismatched dimensions: arm_order={}, rewards={}",
                arm_order.len(),
                rewards.len()
            )));
        }

        let mut stats = Self::new(arm_count);
        for (&arm, &reward) in arm_order.iter().zip(rewards) {
            if arm >= arm_count {
                return Err(BanditError::invalid(format!(
                    "arm {arm} out of range for {arm_count} arms"
                )));
            }
            stats.record(arm, reward);
        }
        Ok(stats)
    }

    /// Records one pull of `arm` that paid `reward`.
    ///
    /// The estimate moves by `(reward - q) / n` after the count is bumped, which
    /// keeps it equal to the running mean without dividing a growing sum.
    pub fn record(&mut self, arm: usize, reward: f64) {
        self.counts[arm] += 1;
        self.cumulative_rewards[arm] += reward;
        let q = &mut self.q_values[arm];
        *q += (reward - *q) / self.counts[arm] as f64;
    }

    pub fn arm_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn cumulative_rewards(&self) -> &[f64] {
        &self.cumulative_rewards
    }

    pub fn q_values(&self) -> &[f64] {
        &self.q_values
    }

    pub fn total_pulls(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Arm with the highest estimate, lowest index on ties.
    pub fn best_arm(&self) -> Option<usize> {
        argmax(&self.q_values)
    }
}

/// Index of the largest value, preferring the lowest index on ties.
///
/// NaN entries never win. Returns `None` for an empty slice.
pub fn argmax(values: &[f64]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] || (values[best].is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    Some(best)
}

//! The frozen output of one simulation run.

use serde::{Deserialize, Serialize};

use crate::arm::ArmStatistics;
use crate::error::Result;

/// Lower and upper confidence bound for one arm at one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Policy-specific series handed to the summary at the end of a run.
///
/// A `None` field means the policy does not produce that series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    pub epsilons: Option<Vec<f64>>,
    pub confidence_intervals: Option<Vec<Vec<ConfidenceInterval>>>,
}

/// Everything a run learned: final statistics, pull history and diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningSummary {
    /// Final per-arm statistics.
    pub arm: ArmStatistics,
    /// Arm pulled at each iteration, in order.
    pub arm_order: Vec<usize>,
    /// Realized reward at each iteration, parallel to `arm_order`.
    pub rewards: Vec<f64>,
    /// Final mean-reward estimates.
    pub q_values: Vec<f64>,
    /// Exploration probability trace (epsilon-decreasing only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilons: Option<Vec<f64>>,
    /// Per-iteration, per-arm confidence bands (UCB1 only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_intervals: Option<Vec<Vec<ConfidenceInterval>>>,
}

impl LearningSummary {
    pub(crate) fn assemble(
        arm: ArmStatistics,
        arm_order: Vec<usize>,
        rewards: Vec<f64>,
        diagnostics: Diagnostics,
    ) -> Self {
        let q_values = arm.q_values().to_vec();
        Self {
            arm,
            arm_order,
            rewards,
            q_values,
            epsilons: diagnostics.epsilons,
            confidence_intervals: diagnostics.confidence_intervals,
        }
    }

    pub fn iterations(&self) -> usize {
        self.arm_order.len()
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    /// Average reward per iteration, 0 for an empty run.
    pub fn mean_reward(&self) -> f64 {
        if self.rewards.is_empty() {
            0.0
        } else {
            self.total_reward() / self.rewards.len() as f64
        }
    }

    /// Fraction of all pulls that went to each arm.
    pub fn selection_share(&self) -> Vec<f64> {
        let total = self.arm.total_pulls();
        self.arm
            .counts()
            .iter()
            .map(|&c| if total == 0 { 0.0 } else { c as f64 / total as f64 })
            .collect()
    }

    /// Arm with the highest final estimate.
    pub fn best_arm(&self) -> Option<usize> {
        self.arm.best_arm()
    }

    /// Rebuilds the arm statistics from `arm_order` and `rewards`.
    pub fn replay_statistics(&self) -> Result<ArmStatistics> {
        ArmStatistics::replay(self.arm.arm_count(), &self.arm_order, &self.rewards)
    }

    /// Epsilon trace rounded to `places` decimals, for display.
    pub fn epsilons_rounded(&self, places: i32) -> Option<Vec<f64>> {
        let scale = 10f64.powi(places);
        self.epsilons
            .as_ref()
            .map(|eps| eps.iter().map(|e| (e * scale).round() / scale).collect())
    }
}

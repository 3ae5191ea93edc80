//! Policy trait definition for multi-armed bandit algorithms

use rand::Rng;

use crate::arm::ArmStatistics;
use crate::error::{BanditError, Result};
use crate::summary::Diagnostics;

/// Arm-selection strategy driven by the simulation loop.
///
/// A policy reads the run's [`ArmStatistics`] but never mutates them; the
/// loop owns the statistics and records each pull before calling
/// [`Policy::update`]. Policy state lives for exactly one run.
///
/// The trait takes `dyn rand::RngCore` so that `Box<dyn Policy>` stays
/// object safe.
pub trait Policy: Send {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Choose an arm for the 1-based `iteration`.
    ///
    /// # Returns
    /// An index in `[0, stats.arm_count())`, or
    /// [`BanditError::InvalidConfiguration`] when there are no arms.
    fn select(
        &self,
        stats: &ArmStatistics,
        iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize>;

    /// Observe the outcome of `iteration`. `stats` already includes the pull.
    fn update(&mut self, _arm: usize, _reward: f64, _stats: &ArmStatistics, _iteration: usize) {}

    /// Hand over any series recorded during the run.
    fn into_diagnostics(self: Box<Self>) -> Diagnostics {
        Diagnostics::default()
    }
}

/// Returns the arm count, failing when there is nothing to choose from.
pub(crate) fn require_arms(stats: &ArmStatistics) -> Result<usize> {
    if stats.is_empty() {
        Err(BanditError::invalid("no arms available"))
    } else {
        Ok(stats.arm_count())
    }
}

pub(crate) fn uniform_arm(arm_count: usize, rng: &mut dyn rand::RngCore) -> usize {
    rng.random_range(0..arm_count)
}

pub(crate) fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BanditError::invalid(format!(
            "{name} must be between 0 and 1, got {value}"
        )))
    }
}

pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BanditError::invalid(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

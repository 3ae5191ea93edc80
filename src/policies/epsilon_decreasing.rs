use crate::arm::ArmStatistics;
use crate::error::Result;
use crate::policy::{Policy, check_unit_interval};
use crate::summary::Diagnostics;

use super::epsilon_greedy::explore_or_exploit;

/// Epsilon-greedy with an exploration rate that shrinks over the run.
///
/// Every `decay_interval` iterations epsilon is multiplied by `1 - decay`.
/// The trace starts with the initial epsilon and gains one entry per
/// iteration: entry `i` is the value iteration `i + 1` explores with.
#[derive(Clone, Debug)]
pub struct EpsilonDecreasing {
    epsilon: f64,
    decay: f64,
    decay_interval: usize,
    epsilons: Vec<f64>,
}

impl EpsilonDecreasing {
    /// A `decay` or `decay_interval` of zero keeps epsilon constant.
    pub fn new(epsilon: f64, decay: f64, decay_interval: usize) -> Result<Self> {
        check_unit_interval("epsilon", epsilon)?;
        check_unit_interval("decay", decay)?;
        Ok(Self {
            epsilon,
            decay,
            decay_interval,
            epsilons: vec![epsilon],
        })
    }

    /// The epsilon the next selection will use.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn epsilons(&self) -> &[f64] {
        &self.epsilons
    }
}

impl Policy for EpsilonDecreasing {
    fn name(&self) -> &'static str {
        "epsilon_decreasing"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        _iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        explore_or_exploit(self.epsilon, stats, rng)
    }

    fn update(&mut self, _arm: usize, _reward: f64, _stats: &ArmStatistics, iteration: usize) {
        if self.decay_interval > 0 && self.decay > 0.0 && iteration % self.decay_interval == 0 {
            self.epsilon *= 1.0 - self.decay;
        }
        self.epsilons.push(self.epsilon);
    }

    fn into_diagnostics(self: Box<Self>) -> Diagnostics {
        Diagnostics {
            epsilons: Some(self.epsilons),
            confidence_intervals: None,
        }
    }
}

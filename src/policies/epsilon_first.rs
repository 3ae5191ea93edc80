use crate::arm::{ArmStatistics, argmax};
use crate::error::Result;
use crate::policy::{Policy, require_arms, uniform_arm};

/// Explore uniformly for a fixed number of iterations, then always exploit.
#[derive(Clone, Debug)]
pub struct EpsilonFirst {
    exploration: usize,
}

impl EpsilonFirst {
    pub fn new(exploration: usize) -> Self {
        Self { exploration }
    }

    /// Number of leading iterations spent exploring.
    pub fn exploration(&self) -> usize {
        self.exploration
    }
}

impl Policy for EpsilonFirst {
    fn name(&self) -> &'static str {
        "epsilon_first"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        let n = require_arms(stats)?;
        if iteration <= self.exploration {
            Ok(uniform_arm(n, rng))
        } else {
            Ok(argmax(stats.q_values()).unwrap_or(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_switches_to_greedy_after_exploration() {
        let policy = EpsilonFirst::new(50);
        let stats = ArmStatistics::replay(3, &[0, 1, 2], &[0.1, 0.2, 0.9]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);

        let explored: std::collections::HashSet<usize> = (1..=50)
            .map(|i| policy.select(&stats, i, &mut rng).unwrap())
            .collect();
        assert_eq!(explored.len(), 3);

        for i in 51..=200 {
            assert_eq!(policy.select(&stats, i, &mut rng).unwrap(), 2);
        }
    }

    #[test]
    fn test_zero_exploration_is_greedy_from_start() {
        let policy = EpsilonFirst::new(0);
        let stats = ArmStatistics::new(3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        assert_eq!(policy.select(&stats, 1, &mut rng).unwrap(), 0);
        assert_eq!(policy.exploration(), 0);
    }
}

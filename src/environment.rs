//! Stochastic reward oracle.
//!
//! Each arm pays a fixed reward with a fixed probability and nothing otherwise.

use rand::Rng;
use serde::Serialize;

use crate::arm::argmax;
use crate::error::{BanditError, Result};

/// A fixed set of Bernoulli-paying arms.
///
/// # Examples
///
/// ```
/// use banditsim::Environment;
///
/// let env = Environment::new(vec![0.2, 0.8], vec![1.0, 1.0]).unwrap();
/// assert_eq!(env.arm_count(), 2);
/// assert_eq!(env.best_arm(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Environment {
    reward_probabilities: Vec<f64>,
    rewards: Vec<f64>,
}

impl Environment {
    /// Creates an environment from per-arm success probabilities and payouts.
    ///
    /// Fails with [`BanditError::InvalidConfiguration`] when the sequences are
    /// empty or of different lengths, when a probability lies outside `[0, 1]`,
    /// or when a reward is not finite.
    pub fn new(reward_probabilities: Vec<f64>, rewards: Vec<f64>) -> Result<Self> {
        if rewards.is_empty() {
            return Err(BanditError::invalid("environment needs at least one arm"));
        }

        if reward_probabilities.len() != rewards.len() {
            return Err(BanditError::invalid(format!(
                "mismatched dimensions: reward_probabilities={}, rewards={}",
                reward_probabilities.len(),
                rewards.len()
            )));
        }

        if let Some((arm, p)) = reward_probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(BanditError::invalid(format!(
                "reward probability of arm {arm} must be between 0 and 1, got {p}"
            )));
        }

        if let Some((arm, r)) = rewards.iter().enumerate().find(|(_, r)| !r.is_finite()) {
            return Err(BanditError::invalid(format!(
                "reward of arm {arm} must be finite, got {r}"
            )));
        }

        Ok(Self {
            reward_probabilities,
            rewards,
        })
    }

    /// Pulls `arm` once, consuming exactly one uniform draw.
    ///
    /// The draw lies in `[0, 1)`, so probability 1 always pays and probability
    /// 0 never does. `arm` must be below [`Environment::arm_count`].
    pub fn reward<R: Rng + ?Sized>(&self, arm: usize, rng: &mut R) -> f64 {
        let sample: f64 = rng.random();
        if sample >= self.reward_probabilities[arm] {
            0.0
        } else {
            self.rewards[arm]
        }
    }

    pub fn arm_count(&self) -> usize {
        self.rewards.len()
    }

    pub fn reward_probabilities(&self) -> &[f64] {
        &self.reward_probabilities
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Expected payout per pull for each arm.
    pub fn expected_rewards(&self) -> Vec<f64> {
        self.reward_probabilities
            .iter()
            .zip(&self.rewards)
            .map(|(p, r)| p * r)
            .collect()
    }

    /// The arm an oracle would always pull (lowest index on ties).
    pub fn best_arm(&self) -> usize {
        argmax(&self.expected_rewards()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_certain_and_impossible_arms() {
        let env = Environment::new(vec![1.0, 0.0], vec![3.0, 5.0]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..500 {
            assert_eq!(env.reward(0, &mut rng), 3.0);
            assert_eq!(env.reward(1, &mut rng), 0.0);
        }
    }

    #[test]
    fn test_reward_frequency() {
        let env = Environment::new(vec![0.3], vec![1.0]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let n = 10_000;
        let hits: f64 = (0..n).map(|_| env.reward(0, &mut rng)).sum();
        assert!((hits / n as f64 - 0.3).abs() < 0.02);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(
            Environment::new(vec![], vec![]),
            Err(BanditError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Environment::new(vec![0.5], vec![1.0, 2.0]),
            Err(BanditError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Environment::new(vec![1.5, 0.2], vec![1.0, 2.0]),
            Err(BanditError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Environment::new(vec![-0.1], vec![1.0]),
            Err(BanditError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Environment::new(vec![f64::NAN], vec![1.0]),
            Err(BanditError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Environment::new(vec![0.5], vec![f64::INFINITY]),
            Err(BanditError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_expected_rewards_and_best_arm() {
        let env = Environment::new(vec![0.2, 0.5, 0.25], vec![5.0, 2.0, 4.0]).unwrap();
        assert_eq!(env.expected_rewards(), vec![1.0, 1.0, 1.0]);
        // tie resolves to the lowest index
        assert_eq!(env.best_arm(), 0);

        let env = Environment::new(vec![0.2, 0.9], vec![1.0, 1.0]).unwrap();
        assert_eq!(env.best_arm(), 1);
    }
}

use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::arm::{ArmStatistics, argmax};
use crate::error::Result;
use crate::policy::{Policy, check_positive, require_arms};

/// Thompson Sampling policy using Beta distribution
///
/// Each arm carries a Beta posterior over "the pull paid out". Any nonzero
/// reward counts as a success; failures are the remaining pulls. Every
/// selection draws one sample per arm and picks the largest.
#[derive(Clone, Debug)]
pub struct ThompsonSampling {
    /// Prior alpha parameter for Beta distribution (defaults to 1.0)
    prior_alpha: f64,
    /// Prior beta parameter for Beta distribution (defaults to 1.0)
    prior_beta: f64,
    /// Nonzero-reward pulls per arm
    successes: Vec<u64>,
}

impl ThompsonSampling {
    /// Creates a Thompson Sampling policy with the uniform Beta(1,1) prior
    pub fn new(arm_count: usize) -> Self {
        Self {
            prior_alpha: 1.0,
            prior_beta: 1.0,
            successes: vec![0; arm_count],
        }
    }

    /// Creates a Thompson Sampling policy with specified Beta prior parameters
    ///
    /// # Arguments
    /// * `prior_alpha` - Alpha parameter for Beta prior (must be positive)
    /// * `prior_beta` - Beta parameter for Beta prior (must be positive)
    pub fn with_prior(arm_count: usize, prior_alpha: f64, prior_beta: f64) -> Result<Self> {
        check_positive("prior_alpha", prior_alpha)?;
        check_positive("prior_beta", prior_beta)?;
        Ok(Self {
            prior_alpha,
            prior_beta,
            successes: vec![0; arm_count],
        })
    }

    /// Gets the prior parameters
    pub fn prior(&self) -> (f64, f64) {
        (self.prior_alpha, self.prior_beta)
    }

    pub fn successes(&self) -> &[u64] {
        &self.successes
    }

    /// Posterior `(alpha, beta)` of `arm` given `pulls` total pulls.
    fn posterior(&self, arm: usize, pulls: u64) -> (f64, f64) {
        let wins = self.successes.get(arm).copied().unwrap_or(0);
        let losses = pulls.saturating_sub(wins);
        (
            self.prior_alpha + wins as f64,
            self.prior_beta + losses as f64,
        )
    }

    /// Posterior mean of every arm.
    pub fn expected_values(&self, stats: &ArmStatistics) -> Vec<f64> {
        stats
            .counts()
            .iter()
            .enumerate()
            .map(|(arm, &n)| {
                let (alpha, beta) = self.posterior(arm, n);
                alpha / (alpha + beta)
            })
            .collect()
    }
}

fn sample_beta<R: Rng + ?Sized>(alpha: f64, beta: f64, rng: &mut R) -> f64 {
    match Beta::new(alpha, beta) {
        Ok(dist) => dist.sample(rng),
        // parameters are validated positive; fall back to the mean regardless
        Err(_) => alpha / (alpha + beta),
    }
}

impl Policy for ThompsonSampling {
    fn name(&self) -> &'static str {
        "thompson_sampling"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        _iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        require_arms(stats)?;
        let samples: Vec<f64> = stats
            .counts()
            .iter()
            .enumerate()
            .map(|(arm, &n)| {
                let (alpha, beta) = self.posterior(arm, n);
                sample_beta(alpha, beta, &mut *rng)
            })
            .collect();
        Ok(argmax(&samples).unwrap_or(0))
    }

    fn update(&mut self, arm: usize, reward: f64, _stats: &ArmStatistics, _iteration: usize) {
        if arm >= self.successes.len() {
            self.successes.resize(arm + 1, 0);
        }
        if reward != 0.0 {
            self.successes[arm] += 1;
        }
    }
}

use crate::arm::ArmStatistics;
use crate::error::Result;
use crate::policy::{Policy, require_arms, uniform_arm};

/// Random selection policy - selects arms uniformly at random
#[derive(Clone, Debug, Default)]
pub struct Random;

impl Policy for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(
        &self,
        stats: &ArmStatistics,
        _iteration: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        let n = require_arms(stats)?;
        Ok(uniform_arm(n, rng))
    }
}

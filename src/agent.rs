//! The simulation loop: policy picks, environment pays, statistics learn.

use rand::Rng;
use tracing::{event, trace_span};

use crate::arm::ArmStatistics;
use crate::environment::Environment;
use crate::error::{BanditError, Result};
use crate::policies::PolicyConfig;
use crate::summary::LearningSummary;

/// A configured simulation: an environment, an iteration budget and a policy.
///
/// The agent itself holds no run state. Every call to [`Agent::act`] starts
/// from zeroed statistics and freshly built policy state, so one agent can be
/// run repeatedly, or from several threads at once.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    environment: Environment,
    iterations: usize,
    policy: PolicyConfig,
}

impl Agent {
    /// Creates an agent after validating the iteration count and policy
    /// parameters.
    pub fn new(environment: Environment, iterations: usize, policy: PolicyConfig) -> Result<Self> {
        if iterations == 0 {
            return Err(BanditError::invalid("iterations must be positive"));
        }
        policy.validate()?;

        Ok(Self {
            environment,
            iterations,
            policy,
        })
    }

    /// Uniformly random baseline.
    pub fn random(environment: Environment, iterations: usize) -> Result<Self> {
        Self::new(environment, iterations, PolicyConfig::Random)
    }

    pub fn epsilon_greedy(environment: Environment, iterations: usize, epsilon: f64) -> Result<Self> {
        Self::new(environment, iterations, PolicyConfig::EpsilonGreedy { epsilon })
    }

    pub fn epsilon_decreasing(
        environment: Environment,
        iterations: usize,
        epsilon: f64,
        decay: f64,
        decay_interval: usize,
    ) -> Result<Self> {
        Self::new(
            environment,
            iterations,
            PolicyConfig::EpsilonDecreasing {
                epsilon,
                decay,
                decay_interval,
            },
        )
    }

    pub fn epsilon_first(
        environment: Environment,
        iterations: usize,
        exploration: usize,
    ) -> Result<Self> {
        Self::new(environment, iterations, PolicyConfig::EpsilonFirst { exploration })
    }

    pub fn softmax(environment: Environment, iterations: usize, tau: f64) -> Result<Self> {
        Self::new(environment, iterations, PolicyConfig::Softmax { tau })
    }

    pub fn ucb1(environment: Environment, iterations: usize) -> Result<Self> {
        Self::new(environment, iterations, PolicyConfig::Ucb1)
    }

    pub fn thompson_sampling(environment: Environment, iterations: usize) -> Result<Self> {
        Self::new(environment, iterations, PolicyConfig::thompson_sampling())
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Runs the simulation to completion on the thread-local random source.
    pub fn act(&self) -> Result<LearningSummary> {
        self.act_with_rng(&mut rand::rng())
    }

    /// Runs the simulation to completion on `rng`.
    ///
    /// With a seeded generator the summary is fully reproducible.
    pub fn act_with_rng<R: Rng>(&self, rng: &mut R) -> Result<LearningSummary> {
        let arm_count = self.environment.arm_count();
        let mut policy = self.policy.build(arm_count)?;
        let mut stats = ArmStatistics::new(arm_count);
        let mut arm_order = Vec::with_capacity(self.iterations);
        let mut rewards = Vec::with_capacity(self.iterations);

        let span = trace_span!("act", policy = policy.name());
        let _enter = span.enter();
        event!(
            tracing::Level::DEBUG,
            arms = arm_count,
            iterations = self.iterations,
            "Starting simulation"
        );

        for iteration in 1..=self.iterations {
            let arm = policy.select(&stats, iteration, rng)?;
            let reward = self.environment.reward(arm, rng);

            stats.record(arm, reward);
            arm_order.push(arm);
            rewards.push(reward);
            policy.update(arm, reward, &stats, iteration);

            event!(tracing::Level::TRACE, iteration, arm, reward, "Pulled arm");
        }

        let summary = LearningSummary::assemble(stats, arm_order, rewards, policy.into_diagnostics());
        event!(
            tracing::Level::DEBUG,
            total_reward = summary.total_reward(),
            best_arm = ?summary.best_arm(),
            "Simulation finished"
        );
        Ok(summary)
    }
}

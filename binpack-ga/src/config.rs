use binpack::{PackError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the genetic solver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GaConfig {
    /// Maximum number of generations to evaluate, at least 1
    pub max_generations: usize,
    /// The solver stops as soon as a fill ratio of at least this value is reached, in range [0, 1]
    pub target_fitness: f64,
    /// Probability that two selected parents exchange their tails
    pub crossover_rate: f64,
    /// Probability, per value, that a gene value is reflected
    pub mutation_rate: f64,
    /// Wall-clock budget in seconds. If undefined, only the number of generations limits the run
    pub time_limit_s: Option<f64>,
    /// Minimum time in seconds between two progress reports
    pub feedback_interval_s: f64,
    /// Seed for the PRNG. If undefined, the solver will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
}

impl GaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_generations < 1 {
            return Err(PackError::InvalidMaxGenerations);
        }
        if !(0.0..=1.0).contains(&self.target_fitness) {
            return Err(PackError::TargetFitnessOutOfRange(self.target_fitness));
        }
        for (what, value) in [
            ("crossover rate", self.crossover_rate),
            ("mutation rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PackError::RateOutOfRange { what, value });
            }
        }
        for (what, value) in [
            ("time limit", self.time_limit_s.unwrap_or(0.0)),
            ("feedback interval", self.feedback_interval_s),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(PackError::InvalidMeasure { what, value });
            }
        }
        Ok(())
    }
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            max_generations: 100,
            target_fitness: 1.0,
            crossover_rate: 0.70,
            mutation_rate: 0.001,
            time_limit_s: None,
            feedback_interval_s: 1.0,
            prng_seed: Some(0),
        }
    }
}

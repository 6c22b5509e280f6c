//! Engine configuration.
//!
//! [`EngineConfig`] holds all parameters that control the evolutionary
//! loop. The snapshot is immutable once an [`Engine`](crate::Engine) is
//! constructed.

use crate::selection::Selection;
use thiserror::Error;

/// A configuration parameter was invalid at engine construction.
///
/// All validation happens synchronously in [`Engine::new`](crate::Engine::new);
/// no configuration error can surface mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The initial population held fewer than two chromosomes.
    #[error("initial population must contain at least 2 chromosomes, got {0}")]
    PopulationTooSmall(usize),

    /// A probability parameter fell outside `[0.0, 1.0]`.
    #[error("{name} must lie within [0.0, 1.0], got {value}")]
    ProbabilityOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// `max_generations` was zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
}

/// Configuration for the evolutionary engine.
///
/// Controls termination (fitness threshold, generation budget), operator
/// rates, selection strategy, and seeding.
///
/// # Defaults
///
/// ```
/// use evo_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_generations, 100);
/// assert!(config.fitness_threshold.is_infinite());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evo_engine::{EngineConfig, Selection};
///
/// let config = EngineConfig::default()
///     .with_fitness_threshold(13.0)
///     .with_max_generations(5000)
///     .with_selection(Selection::Roulette)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Fitness value at which the run stops successfully.
    ///
    /// Checked against the best-ever individual at the head of every
    /// generation. The default of `f64::INFINITY` runs the full budget.
    pub fitness_threshold: f64,

    /// Maximum number of generations before termination. Must be ≥ 1.
    pub max_generations: usize,

    /// Probability of mutating each individual of the new generation (0.0–1.0).
    ///
    /// Applied as an independent Bernoulli trial per individual, after
    /// replacement, uncorrelated with the crossover outcome.
    pub mutation_chance: f64,

    /// Probability of applying crossover to a selected pair (0.0–1.0).
    ///
    /// When crossover is not applied, clones of both parents are carried
    /// into the next generation instead.
    pub crossover_chance: f64,

    /// Selection strategy for choosing parent pairs.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fitness_threshold: f64::INFINITY,
            max_generations: 100,
            mutation_chance: 0.01,
            crossover_chance: 0.7,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the fitness threshold for early termination.
    pub fn with_fitness_threshold(mut self, threshold: f64) -> Self {
        self.fitness_threshold = threshold;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-individual mutation chance.
    ///
    /// Out-of-range values are rejected at engine construction, not
    /// clamped here.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance;
        self
    }

    /// Sets the per-mating-event crossover chance.
    ///
    /// Out-of-range values are rejected at engine construction, not
    /// clamped here.
    pub fn with_crossover_chance(mut self, chance: f64) -> Self {
        self.crossover_chance = chance;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first offending parameter as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ConfigError::ProbabilityOutOfRange {
                name: "mutation_chance",
                value: self.mutation_chance,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover_chance) {
            return Err(ConfigError::ProbabilityOutOfRange {
                name: "crossover_chance",
                value: self.crossover_chance,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.fitness_threshold.is_infinite());
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_chance - 0.01).abs() < 1e-10);
        assert!((config.crossover_chance - 0.7).abs() < 1e-10);
        assert_eq!(config.selection, Selection::Tournament);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_fitness_threshold(13.0)
            .with_max_generations(5000)
            .with_mutation_chance(0.25)
            .with_crossover_chance(0.5)
            .with_selection(Selection::Roulette)
            .with_seed(42);

        assert!((config.fitness_threshold - 13.0).abs() < 1e-10);
        assert_eq!(config.max_generations, 5000);
        assert!((config.mutation_chance - 0.25).abs() < 1e-10);
        assert!((config.crossover_chance - 0.5).abs() < 1e-10);
        assert_eq!(config.selection, Selection::Roulette);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_crossover_above_one() {
        let config = EngineConfig::default().with_crossover_chance(1.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "crossover_chance",
                value: 1.5,
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_mutation() {
        let config = EngineConfig::default().with_mutation_chance(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "mutation_chance",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_probability() {
        let config = EngineConfig::default().with_mutation_chance(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_generations() {
        let config = EngineConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_boundary_probabilities_are_valid() {
        let config = EngineConfig::default()
            .with_mutation_chance(0.0)
            .with_crossover_chance(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ProbabilityOutOfRange {
            name: "crossover_chance",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "crossover_chance must lie within [0.0, 1.0], got 1.5"
        );
    }
}

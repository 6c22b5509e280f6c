//! Generic evolutionary-search engine.
//!
//! A population of candidate solutions ("chromosomes") is evolved through
//! fitness-biased selection, recombination, and mutation toward solutions
//! maximizing a user-supplied fitness function. The engine is generic over
//! one concrete chromosome type and contains no domain knowledge: equation
//! solving, letter assignment, sequence ordering, and similar problems are
//! all plugged in by implementing [`Chromosome`].
//!
//! # Core Traits
//!
//! - [`Chromosome`]: A candidate solution — fitness evaluation, random
//!   instantiation, pairwise crossover, in-place mutation
//! - [`Fitness`]: Comparable score type, higher is better
//!
//! # Key Types
//!
//! - [`EngineConfig`]: Threshold, generation budget, operator rates, selection
//! - [`Engine`]: Owns the population and executes the generational loop
//! - [`RunResult`]: Best individual found, with run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Generic permutation crossover and mutation helpers
//!
//! # Example
//!
//! ```
//! use evo_engine::{Chromosome, Engine, EngineConfig, Selection};
//! use rand::Rng;
//!
//! // OneMax: maximize the number of set bits.
//! #[derive(Clone)]
//! struct BitString {
//!     bits: Vec<bool>,
//! }
//!
//! impl Chromosome for BitString {
//!     type Fitness = f64;
//!
//!     fn fitness(&self) -> f64 {
//!         self.bits.iter().filter(|&&b| b).count() as f64
//!     }
//!
//!     fn random<R: Rng>(rng: &mut R) -> Self {
//!         Self {
//!             bits: (0..16).map(|_| rng.random_bool(0.5)).collect(),
//!         }
//!     }
//!
//!     fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
//!         let point = rng.random_range(0..self.bits.len());
//!         let mut a = self.clone();
//!         let mut b = other.clone();
//!         a.bits[point..].copy_from_slice(&other.bits[point..]);
//!         b.bits[point..].copy_from_slice(&self.bits[point..]);
//!         (a, b)
//!     }
//!
//!     fn mutate<R: Rng>(&mut self, rng: &mut R) {
//!         let i = rng.random_range(0..self.bits.len());
//!         self.bits[i] = !self.bits[i];
//!     }
//! }
//!
//! let config = EngineConfig::default()
//!     .with_fitness_threshold(16.0)
//!     .with_max_generations(500)
//!     .with_mutation_chance(0.2)
//!     .with_crossover_chance(0.7)
//!     .with_selection(Selection::Tournament)
//!     .with_seed(7);
//!
//! let engine = Engine::<BitString>::with_random_population(60, config).unwrap();
//! let result = engine.run();
//! assert!(result.best_fitness >= 14.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
pub mod operators;
mod selection;
mod types;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, GenerationStats, RunResult, Termination};
pub use selection::Selection;
pub use types::{Chromosome, Fitness};

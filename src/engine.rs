//! The generational evolutionary loop.
//!
//! [`Engine`] owns the population for the duration of a run and drives it
//! through repeated selection, reproduction, and mutation until the fitness
//! threshold is reached or the generation budget is exhausted.

use crate::config::{ConfigError, EngineConfig};
use crate::types::{Chromosome, Fitness};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best-ever individual reached the fitness threshold.
    ThresholdReached,
    /// The generation budget ran out before the threshold was met.
    BudgetExhausted,
}

/// Per-generation snapshot reported to an observer.
///
/// Observers are diagnostic only; they cannot influence the outcome of
/// the run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based index of the generation just completed.
    pub generation: usize,
    /// Fitness of the best individual observed so far across the whole run.
    pub best_fitness: f64,
    /// Mean fitness of the current population.
    pub mean_fitness: f64,
}

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct RunResult<C: Chromosome> {
    /// The best individual observed across all generations.
    ///
    /// An owned copy, decoupled from the final population: later mutation
    /// of surviving individuals cannot alter it. It is not necessarily a
    /// member of the final population, since the live best can regress
    /// under stochastic replacement.
    pub best: C,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: C::Fitness,

    /// Number of generations executed before termination.
    ///
    /// Zero when the initial population already met the threshold.
    pub generations: usize,

    /// Which termination path ended the run.
    pub termination: Termination,

    /// Best-ever fitness recorded after each generation, starting with the
    /// initial population (`generations + 1` entries). Non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Generic evolutionary-search engine.
///
/// The engine is constructed once per run with an initial population and an
/// immutable [`EngineConfig`], exclusively owns the population while
/// running, and is consumed by [`run`](Engine::run).
///
/// # Usage
///
/// ```ignore
/// let population: Vec<MySolution> = (0..100).map(|_| MySolution::random(&mut rng)).collect();
/// let engine = Engine::new(population, EngineConfig::default().with_seed(42))?;
/// let result = engine.run();
/// println!("best fitness: {:?}", result.best_fitness);
/// ```
pub struct Engine<C: Chromosome> {
    population: Vec<C>,
    config: EngineConfig,
    rng: StdRng,
}

impl<C: Chromosome> Engine<C> {
    /// Creates an engine over a caller-supplied initial population.
    ///
    /// The population is consumed and must hold at least two chromosomes.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the population is too small, a
    /// probability lies outside `[0.0, 1.0]`, or `max_generations` is zero.
    pub fn new(initial_population: Vec<C>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if initial_population.len() < 2 {
            return Err(ConfigError::PopulationTooSmall(initial_population.len()));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        Ok(Self {
            population: initial_population,
            config,
            rng,
        })
    }

    /// Creates an engine with `size` randomly generated chromosomes.
    ///
    /// Convenience constructor for the common case where the initial
    /// population comes from [`Chromosome::random`]. The instances are
    /// drawn from the engine's own (seedable) random source.
    ///
    /// # Errors
    /// Same conditions as [`Engine::new`].
    pub fn with_random_population(size: usize, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if size < 2 {
            return Err(ConfigError::PopulationTooSmall(size));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let population = (0..size).map(|_| C::random(&mut rng)).collect();

        Ok(Self {
            population,
            config,
            rng,
        })
    }

    /// The current population, in order.
    pub fn population(&self) -> &[C] {
        &self.population
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the evolutionary loop to completion.
    ///
    /// Terminates either when the best-ever fitness reaches the configured
    /// threshold (checked at the head of every generation, so a qualifying
    /// initial population returns before any reproduction) or when the
    /// generation budget is exhausted. Both paths yield a result; there is
    /// no failure state.
    pub fn run(self) -> RunResult<C> {
        self.run_with_observer(|_| {})
    }

    /// Runs the evolutionary loop, reporting to `observer` after each
    /// completed generation.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> RunResult<C>
    where
        F: FnMut(&GenerationStats),
    {
        let mut best = self.population[best_index(&self.population)].clone();
        let mut fitness_history = Vec::with_capacity(self.config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        for generation in 0..self.config.max_generations {
            if best.fitness().to_f64() >= self.config.fitness_threshold {
                return RunResult {
                    best_fitness: best.fitness(),
                    best,
                    generations: generation,
                    termination: Termination::ThresholdReached,
                    fitness_history,
                };
            }

            self.reproduce();
            self.mutate_population();

            // Strict improvement only: the live population's best may
            // regress, the best-ever tracker never does.
            let highest = &self.population[best_index(&self.population)];
            if highest.fitness() > best.fitness() {
                best = highest.clone();
            }
            fitness_history.push(best.fitness().to_f64());

            observer(&GenerationStats {
                generation: generation + 1,
                best_fitness: best.fitness().to_f64(),
                mean_fitness: mean_fitness(&self.population),
            });
        }

        RunResult {
            best_fitness: best.fitness(),
            best,
            generations: self.config.max_generations,
            termination: Termination::BudgetExhausted,
            fitness_history,
        }
    }

    /// One reproduction-and-replacement pass.
    ///
    /// Fills a fresh buffer two individuals at a time (the two crossover
    /// children, or clones of both parents), then replaces the population
    /// wholesale. An odd population size overshoots by one; the trailing
    /// individual is dropped so the length stays fixed.
    fn reproduce(&mut self) {
        let n = self.population.len();
        let mut next_gen: Vec<C> = Vec::with_capacity(n + 1);

        while next_gen.len() < n {
            let (p1, p2) = self
                .config
                .selection
                .select_pair(&self.population, &mut self.rng);

            if self.rng.random_range(0.0..1.0) < self.config.crossover_chance {
                let (c1, c2) = self.population[p1].crossover(&self.population[p2], &mut self.rng);
                next_gen.push(c1);
                next_gen.push(c2);
            } else {
                next_gen.push(self.population[p1].clone());
                next_gen.push(self.population[p2].clone());
            }
        }

        next_gen.truncate(n);
        self.population = next_gen;
    }

    /// One mutation pass: an independent Bernoulli trial per individual.
    fn mutate_population(&mut self) {
        for individual in self.population.iter_mut() {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_chance {
                individual.mutate(&mut self.rng);
            }
        }
    }
}

/// Index of the fittest individual, first occurrence on ties.
fn best_index<C: Chromosome>(population: &[C]) -> usize {
    let mut best = 0;
    for i in 1..population.len() {
        if population[i].fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

/// Mean fitness of the population as `f64`.
fn mean_fitness<C: Chromosome>(population: &[C]) -> f64 {
    let total: f64 = population.iter().map(|c| c.fitness().to_f64()).sum();
    total / population.len() as f64
}

// ============================================================================
// Tests
// ============================================================================

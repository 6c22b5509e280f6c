//! Core trait definitions for the evolutionary engine.
//!
//! The two central traits — [`Chromosome`] and [`Fitness`] — define the
//! contract between the generic engine and domain-specific candidate
//! encodings.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `f64` and `f32`.
/// For minimization problems, negate the score or use a wrapper type.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for statistics and observers.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution evolved by the [`Engine`](crate::Engine).
///
/// The engine is generic over one concrete chromosome type and never
/// inspects its internals: it only evaluates fitness, clones survivors,
/// recombines parents, and triggers mutation.
///
/// All four operations take the engine's random source so a seeded run is
/// fully reproducible. There is no error channel at this layer: an encoding
/// whose fitness cannot be evaluated is a programming error, and any panic
/// from a chromosome operation propagates unmodified out of
/// [`Engine::run`](crate::Engine::run).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
/// }
///
/// impl Chromosome for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { score(&self.genes) }
///     fn random<R: Rng>(rng: &mut R) -> Self { /* ... */ }
///     fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) { /* ... */ }
///     fn mutate<R: Rng>(&mut self, rng: &mut R) { /* ... */ }
/// }
/// ```
pub trait Chromosome: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the fitness of this chromosome.
    ///
    /// Must be a pure, deterministic function of the current state: the
    /// engine may evaluate the same individual several times within one
    /// generation and expects a stable value.
    fn fitness(&self) -> Self::Fitness;

    /// Creates a random chromosome, independent of any existing instance.
    ///
    /// Used by [`Engine::with_random_population`](crate::Engine::with_random_population)
    /// and by callers building an initial population.
    fn random<R: Rng>(rng: &mut R) -> Self;

    /// Recombines two parents into exactly two children.
    ///
    /// Both parents are borrowed immutably, so an implementation cannot
    /// mutate them; build the children from copies of the parent state.
    /// Children need not differ structurally from their parents.
    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self);

    /// Applies a small randomized perturbation to this chromosome in place.
    fn mutate<R: Rng>(&mut self, rng: &mut R);
}

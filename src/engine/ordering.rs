//! Pool ordering strategies.
//!
//! The allocator is strictly first-fit over the pool's current order, so
//! the ordering alone decides how subjects spread over a section's day.
//! The production default shuffles uniformly — coverage is best-effort,
//! not guaranteed even. Deterministic orderings exist so tests and
//! reproducible runs can pin placement without touching the allocator.

use std::fmt::Debug;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::pool::Lecture;

/// An ordering applied to a section's lecture pool before allocation.
///
/// Implementations must be pure reorderings: the pool's contents are
/// preserved, only their order may change.
pub trait PoolOrdering: Send + Sync + Debug {
    /// Strategy name (e.g., "shuffled").
    fn name(&self) -> &'static str;

    /// Reorders the pool in place.
    fn arrange(&self, pool: &mut Vec<Lecture>);
}

/// Uniform random shuffle (production default).
#[derive(Debug, Clone, Copy, Default)]
pub struct Shuffled;

impl PoolOrdering for Shuffled {
    fn name(&self) -> &'static str {
        "shuffled"
    }

    fn arrange(&self, pool: &mut Vec<Lecture>) {
        pool.shuffle(&mut rand::rng());
    }
}

/// Reproducible shuffle from a fixed seed.
///
/// Each arrangement starts a fresh rng from the seed, so identical pools
/// arrange identically within and across runs.
#[derive(Debug, Clone, Copy)]
pub struct Seeded(pub u64);

impl PoolOrdering for Seeded {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn arrange(&self, pool: &mut Vec<Lecture>) {
        let mut rng = SmallRng::seed_from_u64(self.0);
        pool.shuffle(&mut rng);
    }
}

/// Keeps the pool in construction (subject-cycling) order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl PoolOrdering for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn arrange(&self, _pool: &mut Vec<Lecture>) {}
}

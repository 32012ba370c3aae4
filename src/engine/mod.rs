//! The scheduling engine.
//!
//! Four pieces cooperate inside one generation run:
//!
//! - [`ConflictIndex`]: O(1) "is teacher T busy at slot S", seeded from
//!   the stored snapshot and updated per placement
//! - [`build_pool`]: expands a course's subjects over the slot grid and
//!   attaches allocated teachers
//! - [`PoolOrdering`]: pluggable pool ordering ([`Shuffled`] by default,
//!   [`Seeded`] / [`Sequential`] for reproducibility)
//! - [`Generator`]: the greedy first-fit allocator and run driver

mod conflict;
mod generator;
mod ordering;
mod pool;

pub use conflict::ConflictIndex;
pub use generator::{GenerationRequest, Generator, RunReport, RunStatus};
pub use ordering::{PoolOrdering, Seeded, Sequential, Shuffled};
pub use pool::{build_pool, AllocationMap, Lecture};

//! Classroom timetable engine.
//!
//! Assigns lectures to a fixed daily slot grid for student sections such
//! that no teacher is double-booked in any slot across an institution.
//! The allocator is a randomized greedy first-fit: subject coverage is
//! best-effort, with no backtracking and no optimality claims. Each
//! generation run treats its target sections as blank slates and
//! replaces their stored entries in one atomic batch.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Course`, `Teacher`, `Section`,
//!   `ScheduleEntry`, the slot grid
//! - **`engine`**: conflict index, lecture pool, pool ordering, the
//!   `Generator` run driver
//! - **`store`**: the `ScheduleStore` seam, `ReplaceBatch`, `MemoryStore`
//! - **`validation`**: boundary checks on generation inputs
//! - **`error`**: `EngineError`, `StoreError`
//!
//! # Example
//!
//! ```
//! use u_timetable::engine::{GenerationRequest, Generator, RunStatus, Sequential};
//! use u_timetable::models::Course;
//! use u_timetable::store::MemoryStore;
//!
//! let course = Course::new("c1", "springfield-high")
//!     .with_name("B.Tech CS Sem-1")
//!     .with_subjects(["Math", "Physics"]);
//! let request = GenerationRequest::new("springfield-high", course)
//!     .with_section("sec-a")
//!     .with_allocation("Math", "t1")
//!     .with_allocation("Physics", "t2");
//!
//! let mut store = MemoryStore::new();
//! let generator = Generator::new().with_slots(4).with_ordering(Sequential);
//! let report = generator.generate(&mut store, &request).unwrap();
//!
//! assert_eq!(report.status, RunStatus::Succeeded);
//! assert_eq!(report.placed, 4);
//! ```
//!
//! # Concurrency
//!
//! A run is single-threaded and owns its conflict index and batch. The
//! institution snapshot is read once and not re-validated at commit, so
//! concurrent runs against one institution can double-book a teacher;
//! callers must serialize runs per institution.

pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

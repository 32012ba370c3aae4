//! Timetable domain models.
//!
//! Fixed-field record types for everything the engine consumes from the
//! surrounding application and everything it persists back. All records
//! are scoped to one institution via a plain string key.
//!
//! | Type | Role |
//! |------|------|
//! | [`Course`] | Ordered subject list shared by its sections |
//! | [`Teacher`] | Allocatable to subjects, one institution each |
//! | [`Section`] | Student group following exactly one course |
//! | [`ScheduleEntry`] | One placed lecture, the persisted output |

mod course;
mod entry;
mod section;
mod teacher;

pub use course::Course;
pub use entry::{slot_time_range, ScheduleEntry, SLOTS_PER_DAY};
pub use section::Section;
pub use teacher::Teacher;

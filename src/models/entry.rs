//! Schedule entry model and the daily slot grid.
//!
//! A [`ScheduleEntry`] is the unit of persisted output: one lecture in
//! one slot of one section's day. Entries are flat records so a store
//! can filter on any field with plain equality.

use serde::{Deserialize, Serialize};

/// Lectures per day in the default grid.
pub const SLOTS_PER_DAY: usize = 8;

/// First lecture starts at 9 AM.
const DAY_START_HOUR: usize = 9;

/// Lecture length in minutes; slots are contiguous.
const LECTURE_MINUTES: usize = 40;

/// One scheduled lecture: the persisted output of a generation run.
///
/// Two invariants hold over every committed entry set:
/// within an institution no two entries share `(teacher_id, slot)`, and
/// within a section no two entries share `slot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Section this lecture belongs to.
    pub section_id: String,
    /// Course the section follows (denormalized for queries).
    pub course_id: String,
    /// Slot index within the daily grid, `0..slots`.
    pub slot: usize,
    /// Teacher giving the lecture.
    pub teacher_id: String,
    /// Subject taught.
    pub subject: String,
    /// Owning institution key.
    pub institution: String,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        section_id: impl Into<String>,
        course_id: impl Into<String>,
        slot: usize,
        teacher_id: impl Into<String>,
        subject: impl Into<String>,
        institution: impl Into<String>,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            course_id: course_id.into(),
            slot,
            teacher_id: teacher_id.into(),
            subject: subject.into(),
            institution: institution.into(),
        }
    }
}

/// Display time range for a slot (e.g., `"9:00 AM - 9:40 AM"`).
///
/// Slot 0 starts at 9 AM; each lecture is 40 minutes with no breaks.
pub fn slot_time_range(slot: usize) -> String {
    let start = DAY_START_HOUR * 60 + slot * LECTURE_MINUTES;
    let end = start + LECTURE_MINUTES;
    format!("{} - {}", format_clock(start), format_clock(end))
}

/// Formats minutes-since-midnight on a 12-hour clock.
fn format_clock(total_minutes: usize) -> String {
    let hour = total_minutes / 60;
    let minute = total_minutes % 60;
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = if hour > 12 { hour - 12 } else { hour };
    format!("{hour12}:{minute:02} {meridiem}")
}

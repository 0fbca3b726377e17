//! Classroom schedule rows and course offering keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One classroom/time/professor assignment for a course offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Semester label (e.g., "2024.1")
    pub semester: String,

    /// Course name
    pub course: String,

    /// Subject taught in this slot
    pub discipline: String,

    /// Professor name
    pub professor: String,

    /// Weekday label as written in the sheet
    pub weekday: String,

    /// Time range label
    pub time: String,

    /// Room label
    pub room: String,

    /// Shift label (morning/afternoon/night)
    pub shift: String,
}

/// A course offering: trimmed course name plus trimmed shift.
///
/// A blank shift is replaced by the placeholder, so two rows with blank
/// shifts address the same offering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    pub course: String,
    pub shift: String,
}

impl CourseKey {
    pub fn new(course: impl Into<String>, shift: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            shift: shift.into(),
        }
    }

    /// Derive the offering key of a schedule row.
    pub fn of(entry: &ScheduleEntry, placeholder: &str) -> Self {
        let shift = entry.shift.trim();
        Self::new(
            entry.course.trim(),
            if shift.is_empty() { placeholder } else { shift },
        )
    }

    /// Whether a schedule row belongs to this offering.
    pub fn matches(&self, entry: &ScheduleEntry, placeholder: &str) -> bool {
        let shift = entry.shift.trim();
        let shift = if shift.is_empty() { placeholder } else { shift };
        entry.course.trim() == self.course && shift == self.shift
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.course, self.shift)
    }
}

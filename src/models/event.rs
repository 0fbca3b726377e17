//! Academic event data structure.

use serde::{Deserialize, Serialize};

/// An event listed in the events sheet.
///
/// `id` is derived from the row position and is only stable within one fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcademicEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,

    /// Empty when the sheet has no description
    pub description: String,

    /// Empty when the sheet has no location
    pub location: String,
}

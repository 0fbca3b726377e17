//! FAQ entry data structure.

use serde::{Deserialize, Serialize};

/// A question/answer pair from the FAQ sheet.
///
/// `id` is derived from the row position and is only stable within one fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

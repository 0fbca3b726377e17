// src/models/mod.rs

//! Domain models for sheet loading.
//!
//! Records are rebuilt wholesale on every fetch and never mutated afterwards.

mod config;
mod event;
mod faq;
mod schedule;

// Re-export all public types
pub use config::{Config, FetcherConfig, LabelsConfig, SourcesConfig, ViewConfig};
pub use event::AcademicEvent;
pub use faq::FaqEntry;
pub use schedule::{CourseKey, ScheduleEntry};

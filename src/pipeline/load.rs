// src/pipeline/load.rs

//! Concurrent load of all three sheets.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{AcademicEvent, FaqEntry, ScheduleEntry};
use crate::services::SheetService;

/// The three datasets behind the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Schedule,
    Events,
    Faq,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Schedule => "schedule",
            Dataset::Events => "events",
            Dataset::Faq => "faq",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one load cycle produced.
///
/// A dataset that failed to load is empty here and listed in `failures`, so
/// consumers can tell "failed" apart from "loaded, zero rows".
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub schedule: Vec<ScheduleEntry>,
    pub events: Vec<AcademicEvent>,
    pub faqs: Vec<FaqEntry>,
    pub loaded_at: DateTime<Utc>,
    pub failures: Vec<Dataset>,
}

impl Snapshot {
    /// Whether a dataset failed in this cycle.
    pub fn failed(&self, dataset: Dataset) -> bool {
        self.failures.contains(&dataset)
    }

    /// Whether every dataset loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load all sheets concurrently.
///
/// Waits for every fetch to settle; a failing sheet never cancels or hides
/// the others.
pub async fn run_load(service: &SheetService) -> Snapshot {
    let (schedule, events, faqs) = tokio::join!(
        service.try_fetch_schedule(),
        service.try_fetch_events(),
        service.try_fetch_faq(),
    );

    let mut failures = Vec::new();
    let schedule = settle(Dataset::Schedule, schedule, &mut failures);
    let events = settle(Dataset::Events, events, &mut failures);
    let faqs = settle(Dataset::Faq, faqs, &mut failures);

    log::info!(
        "Loaded {} schedule entries, {} events, {} FAQ entries",
        schedule.len(),
        events.len(),
        faqs.len()
    );
    if !failures.is_empty() {
        let names: Vec<&str> = failures.iter().map(Dataset::as_str).collect();
        log::warn!("Sheets unavailable this cycle: {}", names.join(", "));
    }

    Snapshot {
        schedule,
        events,
        faqs,
        loaded_at: Utc::now(),
        failures,
    }
}

fn settle<T>(dataset: Dataset, result: Result<Vec<T>>, failures: &mut Vec<Dataset>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load {dataset} sheet: {e}");
            failures.push(dataset);
            Vec::new()
        }
    }
}

// src/services/sheets.rs

//! Sheet loading service.
//!
//! Fetches each dataset, tokenizes it and maps it to typed records. The
//! `fetch_*` methods never fail: errors are logged and the dataset comes back
//! empty, so one broken sheet does not hide the others.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{AcademicEvent, Config, FaqEntry, ScheduleEntry};
use crate::services::normalize::{normalize_events, normalize_faq, normalize_schedule};
use crate::services::source::{HttpSource, SheetSource, fetch_data_lines};

/// Service for loading the schedule, events and FAQ sheets.
pub struct SheetService {
    config: Arc<Config>,
    source: Box<dyn SheetSource>,
}

impl SheetService {
    /// Create a service that reads from the configured HTTP endpoints.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let source = HttpSource::new(&config.fetcher)?;
        Ok(Self::with_source(config, Box::new(source)))
    }

    /// Create a service over any sheet source.
    pub fn with_source(config: Arc<Config>, source: Box<dyn SheetSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and normalize the classroom schedule.
    pub async fn try_fetch_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let lines = fetch_data_lines(self.source.as_ref(), &self.config.sources.schedule_url).await?;
        Ok(normalize_schedule(&lines, &self.config.labels))
    }

    /// Fetch and normalize the events sheet.
    pub async fn try_fetch_events(&self) -> Result<Vec<AcademicEvent>> {
        let lines = fetch_data_lines(self.source.as_ref(), &self.config.sources.events_url).await?;
        Ok(normalize_events(&lines, &self.config.labels))
    }

    /// Fetch and normalize the FAQ sheet.
    pub async fn try_fetch_faq(&self) -> Result<Vec<FaqEntry>> {
        let lines = fetch_data_lines(self.source.as_ref(), &self.config.sources.faq_url).await?;
        Ok(normalize_faq(&lines, &self.config.labels))
    }

    /// Classroom schedule, or empty on failure.
    pub async fn fetch_schedule(&self) -> Vec<ScheduleEntry> {
        or_empty("schedule", self.try_fetch_schedule().await)
    }

    /// Events, or empty on failure.
    pub async fn fetch_events(&self) -> Vec<AcademicEvent> {
        or_empty("events", self.try_fetch_events().await)
    }

    /// FAQ entries, or empty on failure.
    pub async fn fetch_faq(&self) -> Vec<FaqEntry> {
        or_empty("faq", self.try_fetch_faq().await)
    }
}

fn or_empty<T>(sheet: &str, result: Result<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Failed to load {sheet} sheet: {e}");
        Vec::new()
    })
}

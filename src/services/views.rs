// src/services/views.rs

//! Course index, course detail and weekday grouping.
//!
//! Everything here is a pure function of the loaded schedule and the view
//! configuration; recompute whenever either (or the search term) changes.

use std::collections::{HashMap, HashSet};

use crate::models::{Config, CourseKey, LabelsConfig, ScheduleEntry, ViewConfig};
use crate::utils::text::{char_len, collate, contains_ignore_case};

/// Derives navigable course views from schedule entries.
#[derive(Debug, Clone, Copy)]
pub struct CourseCatalog<'a> {
    views: &'a ViewConfig,
    labels: &'a LabelsConfig,
}

impl<'a> CourseCatalog<'a> {
    pub fn new(views: &'a ViewConfig, labels: &'a LabelsConfig) -> Self {
        Self { views, labels }
    }

    pub fn from_config(config: &'a Config) -> Self {
        Self::new(&config.views, &config.labels)
    }

    /// Distinct course offerings whose name contains `search`, sorted by name.
    ///
    /// Header rows, placeholder names and names shorter than the configured
    /// minimum are left out.
    pub fn index(&self, entries: &[ScheduleEntry], search: Option<&str>) -> Vec<CourseKey> {
        let mut seen = HashSet::new();
        let mut courses: Vec<CourseKey> = entries
            .iter()
            .map(|entry| CourseKey::of(entry, &self.labels.placeholder))
            .filter(|key| self.is_listable(&key.course))
            .filter(|key| seen.insert(key.clone()))
            .filter(|key| search.is_none_or(|term| contains_ignore_case(&key.course, term)))
            .collect();

        courses.sort_by(|a, b| collate(&a.course, &b.course));
        courses
    }

    /// Rows of one course offering, in their original order.
    pub fn entries_for<'e>(
        &self,
        entries: &'e [ScheduleEntry],
        key: &CourseKey,
    ) -> Vec<&'e ScheduleEntry> {
        entries
            .iter()
            .filter(|entry| key.matches(entry, &self.labels.placeholder))
            .collect()
    }

    /// First canonical weekday label matching the raw text, if any.
    ///
    /// A label matches when the raw text contains the label up to its first
    /// hyphen ("SEGUNDA" for "Segunda-feira"), or when the label contains the
    /// raw text ("TER" for "Terça-feira"). Blank text never matches.
    pub fn match_weekday(&self, raw: &str) -> Option<&'a str> {
        let raw = raw.trim().to_uppercase();
        let views: &'a ViewConfig = self.views;
        views
            .weekdays
            .iter()
            .find(|label| {
                let label = label.to_uppercase();
                let stem = label.split('-').next().unwrap_or_default();
                (!stem.is_empty() && raw.contains(stem))
                    || (!raw.is_empty() && label.contains(&raw))
            })
            .map(String::as_str)
    }

    /// Bucket entries by canonical weekday.
    ///
    /// Unmatched entries are keyed by their own weekday text, or by the
    /// configured "other" label when that text is blank.
    pub fn group_by_weekday<'e, I>(&self, entries: I) -> WeekdayGroups<'e>
    where
        I: IntoIterator<Item = &'e ScheduleEntry>,
    {
        let mut groups = WeekdayGroups::new(&self.views.weekdays);
        for entry in entries {
            let label = match self.match_weekday(&entry.weekday) {
                Some(day) => day.to_string(),
                None if entry.weekday.trim().is_empty() => self.labels.other_bucket.clone(),
                None => entry.weekday.clone(),
            };
            groups.push(label, entry);
        }
        groups
    }

    fn is_listable(&self, course: &str) -> bool {
        if char_len(course) < self.views.min_course_name_len {
            return false;
        }
        let upper = course.to_uppercase();
        !self
            .views
            .course_denylist
            .iter()
            .any(|denied| denied.to_uppercase() == upper)
    }
}

/// Schedule entries bucketed by weekday label.
#[derive(Debug, Clone)]
pub struct WeekdayGroups<'e> {
    canonical: Vec<String>,
    buckets: Vec<(String, Vec<&'e ScheduleEntry>)>,
}

impl<'e> WeekdayGroups<'e> {
    fn new(canonical: &[String]) -> Self {
        Self {
            canonical: canonical.to_vec(),
            buckets: Vec::new(),
        }
    }

    fn push(&mut self, label: String, entry: &'e ScheduleEntry) {
        match self.buckets.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, bucket)) => bucket.push(entry),
            None => self.buckets.push((label, vec![entry])),
        }
    }

    /// Entries in one bucket.
    pub fn get(&self, label: &str) -> Option<&[&'e ScheduleEntry]> {
        self.buckets
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, bucket)| bucket.as_slice())
    }

    /// Non-empty canonical buckets, in weekday order.
    pub fn canonical(&self) -> impl Iterator<Item = (&str, &[&'e ScheduleEntry])> + '_ {
        self.canonical
            .iter()
            .filter_map(|day| self.get(day).map(|bucket| (day.as_str(), bucket)))
    }

    /// Buckets outside the canonical weekdays, in first-seen order.
    pub fn unmatched(&self) -> impl Iterator<Item = (&str, &[&'e ScheduleEntry])> + '_ {
        self.buckets
            .iter()
            .filter(|(label, _)| !self.canonical.contains(label))
            .map(|(label, bucket)| (label.as_str(), bucket.as_slice()))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, Vec<&'e ScheduleEntry>> {
        self.buckets.into_iter().collect()
    }
}

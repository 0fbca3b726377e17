// src/services/normalize.rs

//! Positional column mapping for the three sheets.
//!
//! Each sheet is described by a [`RowLayout`]: a minimum column count and an
//! ordered list of fields with their fallback values. Rows shorter than the
//! minimum are dropped whole.

use crate::models::{AcademicEvent, FaqEntry, LabelsConfig, ScheduleEntry};
use crate::utils::csv::tokenize_line;

/// A field read from a fixed column position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec<'a> {
    pub field: &'static str,
    pub default: &'a str,
}

impl<'a> ColumnSpec<'a> {
    pub fn new(field: &'static str, default: &'a str) -> Self {
        Self { field, default }
    }
}

/// Column layout of one sheet.
#[derive(Debug, Clone)]
pub struct RowLayout<'a> {
    pub min_columns: usize,
    pub columns: Vec<ColumnSpec<'a>>,
}

impl<'a> RowLayout<'a> {
    /// Classroom schedule: semester, course, discipline, professor, weekday,
    /// time, room, shift. The shift column may be missing.
    pub fn schedule(labels: &'a LabelsConfig) -> Self {
        let placeholder = labels.placeholder.as_str();
        Self {
            min_columns: 7,
            columns: [
                "semester",
                "course",
                "discipline",
                "professor",
                "weekday",
                "time",
                "room",
                "shift",
            ]
            .into_iter()
            .map(|field| ColumnSpec::new(field, placeholder))
            .collect(),
        }
    }

    /// Events: title, date, time, description, location.
    pub fn events(labels: &'a LabelsConfig) -> Self {
        Self {
            min_columns: 2,
            columns: vec![
                ColumnSpec::new("title", &labels.untitled_event),
                ColumnSpec::new("date", &labels.placeholder),
                ColumnSpec::new("time", &labels.placeholder),
                ColumnSpec::new("description", ""),
                ColumnSpec::new("location", ""),
            ],
        }
    }

    /// FAQ: question, answer, category.
    pub fn faq(labels: &'a LabelsConfig) -> Self {
        Self {
            min_columns: 2,
            columns: vec![
                ColumnSpec::new("question", ""),
                ColumnSpec::new("answer", ""),
                ColumnSpec::new("category", &labels.default_category),
            ],
        }
    }

    /// Map tokenized columns onto the layout, or `None` for a short row.
    ///
    /// The result always has one value per [`ColumnSpec`].
    pub fn apply(&self, cols: &[String]) -> Option<Vec<String>> {
        if cols.len() < self.min_columns {
            return None;
        }
        let values = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                cols.get(i)
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .unwrap_or(spec.default)
                    .to_string()
            })
            .collect();
        Some(values)
    }
}

/// Tokenize each data line and map the rows that fit the layout.
///
/// `build` receives the 1-based row position (dropped rows still count) and
/// the mapped values.
fn map_rows<T>(
    lines: &[String],
    layout: &RowLayout<'_>,
    sheet: &str,
    mut build: impl FnMut(usize, Vec<String>) -> T,
) -> Vec<T> {
    let mut dropped = 0;
    let records: Vec<T> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match layout.apply(&tokenize_line(line)) {
            Some(values) => Some(build(i + 1, values)),
            None => {
                dropped += 1;
                None
            }
        })
        .collect();

    if dropped > 0 {
        log::debug!(
            "{sheet}: dropped {dropped} row(s) with fewer than {} columns",
            layout.min_columns
        );
    }
    records
}

/// Build schedule entries from data lines.
pub fn normalize_schedule(lines: &[String], labels: &LabelsConfig) -> Vec<ScheduleEntry> {
    map_rows(lines, &RowLayout::schedule(labels), "schedule", |_, values| {
        let mut v = values.into_iter();
        ScheduleEntry {
            semester: v.next().unwrap_or_default(),
            course: v.next().unwrap_or_default(),
            discipline: v.next().unwrap_or_default(),
            professor: v.next().unwrap_or_default(),
            weekday: v.next().unwrap_or_default(),
            time: v.next().unwrap_or_default(),
            room: v.next().unwrap_or_default(),
            shift: v.next().unwrap_or_default(),
        }
    })
}

/// Build academic events from data lines.
pub fn normalize_events(lines: &[String], labels: &LabelsConfig) -> Vec<AcademicEvent> {
    map_rows(lines, &RowLayout::events(labels), "events", |row, values| {
        let mut v = values.into_iter();
        AcademicEvent {
            id: format!("event-{row}"),
            title: v.next().unwrap_or_default(),
            date: v.next().unwrap_or_default(),
            time: v.next().unwrap_or_default(),
            description: v.next().unwrap_or_default(),
            location: v.next().unwrap_or_default(),
        }
    })
}

/// Build FAQ entries from data lines.
pub fn normalize_faq(lines: &[String], labels: &LabelsConfig) -> Vec<FaqEntry> {
    map_rows(lines, &RowLayout::faq(labels), "faq", |row, values| {
        let mut v = values.into_iter();
        FaqEntry {
            id: format!("faq-{row}"),
            question: v.next().unwrap_or_default(),
            answer: v.next().unwrap_or_default(),
            category: v.next().unwrap_or_default(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_layout_apply_defaults_missing_and_blank() {
        let labels = LabelsConfig::default();
        let layout = RowLayout::faq(&labels);
        let cols = vec!["Q".to_string(), "  ".to_string()];
        assert_eq!(
            layout.apply(&cols),
            Some(vec!["Q".to_string(), "".to_string(), "Geral".to_string()])
        );
        assert_eq!(layout.apply(&["only".to_string()]), None);
    }

    #[test]
    fn test_schedule_six_columns_dropped() {
        let labels = LabelsConfig::default();
        let entries = normalize_schedule(&lines(&["2024.1,Direito,Penal,Ana,Segunda,19h"]), &labels);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_schedule_seven_columns_defaults_to_placeholder() {
        let labels = LabelsConfig::default();
        let entries = normalize_schedule(&lines(&["2024.1,Direito,,Ana,Segunda,19h,B2"]), &labels);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.course, "Direito");
        assert_eq!(entry.discipline, "A definir");
        assert_eq!(entry.room, "B2");
        assert_eq!(entry.shift, "A definir");
    }

    #[test]
    fn test_schedule_maps_eight_columns_in_order() {
        let labels = LabelsConfig::default();
        let entries = normalize_schedule(
            &lines(&["2024.1;Engenharia;Cálculo I;Silva;Terça-feira;08:00 - 10:00;A101;Manhã"]),
            &labels,
        );
        assert_eq!(
            entries,
            vec![ScheduleEntry {
                semester: "2024.1".into(),
                course: "Engenharia".into(),
                discipline: "Cálculo I".into(),
                professor: "Silva".into(),
                weekday: "Terça-feira".into(),
                time: "08:00 - 10:00".into(),
                room: "A101".into(),
                shift: "Manhã".into(),
            }]
        );
    }

    #[test]
    fn test_events_optional_fields_stay_empty() {
        let labels = LabelsConfig::default();
        let events = normalize_events(&lines(&["Palestra,2024-05-01"]), &labels);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Palestra");
        assert_eq!(events[0].date, "2024-05-01");
        assert_eq!(events[0].time, "A definir");
        assert_eq!(events[0].description, "");
        assert_eq!(events[0].location, "");
    }

    #[test]
    fn test_events_blank_title_and_row_ids() {
        let labels = LabelsConfig::default();
        let events = normalize_events(
            &lines(&["solo", ",2024-06-10,14h,Abertura,Auditório"]),
            &labels,
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "event-2");
        assert_eq!(events[0].title, "Evento Sem Título");
        assert_eq!(events[0].location, "Auditório");
    }

    #[test]
    fn test_faq_category_defaults() {
        let labels = LabelsConfig::default();
        let faqs = normalize_faq(
            &lines(&[
                "Como emitir boleto?,Pelo portal",
                "\"Onde fica a biblioteca, afinal?\",Bloco C,Campus",
            ]),
            &labels,
        );
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].id, "faq-1");
        assert_eq!(faqs[0].category, "Geral");
        assert_eq!(faqs[1].question, "Onde fica a biblioteca, afinal?");
        assert_eq!(faqs[1].category, "Campus");
    }
}

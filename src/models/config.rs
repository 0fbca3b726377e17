//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Published CSV export endpoints
    #[serde(default)]
    pub sources: SourcesConfig,

    /// HTTP client settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Fallback texts substituted for missing values
    #[serde(default)]
    pub labels: LabelsConfig,

    /// Course index and weekday grouping rules
    #[serde(default)]
    pub views: ViewConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in self.sources.named() {
            if url.trim().is_empty() {
                return Err(AppError::validation(format!("sources.{name} is empty")));
            }
            Url::parse(url).map_err(|e| {
                AppError::validation(format!("sources.{name} is not a valid URL: {e}"))
            })?;
        }
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.fetcher.cache_buster_param.trim().is_empty() {
            return Err(AppError::validation("fetcher.cache_buster_param is empty"));
        }
        if self.views.weekdays.is_empty() {
            return Err(AppError::validation("No weekdays defined"));
        }
        if let Some(day) = self
            .views
            .weekdays
            .iter()
            .find(|day| day.trim().is_empty() || day.starts_with('-'))
        {
            return Err(AppError::validation(format!(
                "views.weekdays contains an unusable label: {day:?}"
            )));
        }
        if self.views.min_course_name_len == 0 {
            return Err(AppError::validation(
                "views.min_course_name_len must be > 0",
            ));
        }
        Ok(())
    }
}

/// CSV export endpoints, one per dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Classroom schedule sheet
    #[serde(default = "defaults::schedule_url")]
    pub schedule_url: String,

    /// Academic events sheet
    #[serde(default = "defaults::events_url")]
    pub events_url: String,

    /// FAQ sheet
    #[serde(default = "defaults::faq_url")]
    pub faq_url: String,
}

impl SourcesConfig {
    fn named(&self) -> [(&'static str, &str); 3] {
        [
            ("schedule_url", self.schedule_url.as_str()),
            ("events_url", self.events_url.as_str()),
            ("faq_url", self.faq_url.as_str()),
        ]
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            schedule_url: defaults::schedule_url(),
            events_url: defaults::events_url(),
            faq_url: defaults::faq_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Query parameter carrying the cache-defeating timestamp
    #[serde(default = "defaults::cache_buster_param")]
    pub cache_buster_param: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            cache_buster_param: defaults::cache_buster_param(),
        }
    }
}

/// Fallback texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Substituted for empty required fields ("to be defined")
    #[serde(default = "defaults::placeholder")]
    pub placeholder: String,

    /// Title used for events without one
    #[serde(default = "defaults::untitled_event")]
    pub untitled_event: String,

    /// FAQ category used when the column is absent
    #[serde(default = "defaults::default_category")]
    pub default_category: String,

    /// Weekday bucket for entries with no weekday text at all
    #[serde(default = "defaults::other_bucket")]
    pub other_bucket: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            placeholder: defaults::placeholder(),
            untitled_event: defaults::untitled_event(),
            default_category: defaults::default_category(),
            other_bucket: defaults::other_bucket(),
        }
    }
}

/// Course index and weekday grouping rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Canonical weekday labels, in display order
    #[serde(default = "defaults::weekdays")]
    pub weekdays: Vec<String>,

    /// Course names that are header or placeholder rows (case-insensitive)
    #[serde(default = "defaults::course_denylist")]
    pub course_denylist: Vec<String>,

    /// Shortest course name, in characters, admitted to the index
    #[serde(default = "defaults::min_course_name_len")]
    pub min_course_name_len: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            weekdays: defaults::weekdays(),
            course_denylist: defaults::course_denylist(),
            min_course_name_len: defaults::min_course_name_len(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn schedule_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vTU6jxkbv59elM_0qLgfbHpiso5i6j73IJ7Fs_cz4j0VeP80c2-B5W_rMUd704zlGr0bRQsznZg0w7C/pub?output=csv".into()
    }
    pub fn events_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vTf-j5SOyzwXXkJl7vrCnEtXgRbHDNYHRw07g8i-DlWMBCmVTBMigmkvAD8oPGtyafuRAPaZmcCuhkp/pub?output=csv".into()
    }
    pub fn faq_url() -> String {
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vTan5gtVFXwccdEZk7JsuNZGw7nB-ZfT4DIdPnVlEp1gjEIIS0YY66TMhelEuqpu0jlrpISZjLPwPwE/pub?output=csv".into()
    }

    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; ensalamento/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn cache_buster_param() -> String {
        "t".into()
    }

    // Label defaults
    pub fn placeholder() -> String {
        "A definir".into()
    }
    pub fn untitled_event() -> String {
        "Evento Sem Título".into()
    }
    pub fn default_category() -> String {
        "Geral".into()
    }
    pub fn other_bucket() -> String {
        "Outros".into()
    }

    // View defaults
    pub fn weekdays() -> Vec<String> {
        vec![
            "Segunda-feira".into(),
            "Terça-feira".into(),
            "Quarta-feira".into(),
            "Quinta-feira".into(),
            "Sexta-feira".into(),
            "Sábado".into(),
        ]
    }
    pub fn course_denylist() -> Vec<String> {
        vec![
            "CURSO".into(),
            "NOME DO CURSO".into(),
            "A DEFINIR".into(),
            "CURSO/TURNO".into(),
        ]
    }
    pub fn min_course_name_len() -> usize {
        3
    }
}

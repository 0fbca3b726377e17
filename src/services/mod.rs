//! Service layer for sheet loading.
//!
//! This module contains the business logic for:
//! - Downloading sheet exports (`SheetSource`, `HttpSource`)
//! - Mapping CSV rows to records (`normalize`)
//! - Loading each dataset with failure isolation (`SheetService`)
//! - Deriving course views (`CourseCatalog`)

pub mod normalize;
mod sheets;
pub mod source;
mod views;

pub use sheets::SheetService;
pub use source::{HttpSource, SheetSource};
pub use views::{CourseCatalog, WeekdayGroups};

// src/lib.rs

//! Ensalamento: classroom schedule, event and FAQ loader.
//!
//! Reads published spreadsheet CSV exports over HTTP, normalizes them into
//! typed records and derives the course index and weekday views a front end
//! renders.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

//! Utility functions and helpers.

pub mod csv;
pub mod http;
pub mod text;
pub mod url;

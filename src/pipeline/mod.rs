//! Pipeline entry points.
//!
//! - `run_load`: Fetch all sheets concurrently into a `Snapshot`

pub mod load;

pub use load::{Dataset, Snapshot, run_load};

mod insights;
mod summary;
pub mod views;

pub use summary::{CohortEntry, CohortReport, FlaggedProfile};

pub(crate) use insights::generate_insights;

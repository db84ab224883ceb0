//! Core library for the citizen welfare advisory service.
//!
//! [`advisor`] carries the scoring and recommendation pipeline together
//! with its HTTP router; [`roster`] ingests district roster CSV exports
//! into advisor profiles. The remaining modules hold service-level
//! configuration, telemetry, and the error type binaries report with.

pub mod advisor;
pub mod config;
pub mod error;
pub mod roster;
pub mod telemetry;

//! Nexus Sync - Library
//!
//! Synchronizes artifact versions between two Sonatype Nexus instances:
//! missing versions are discovered via the search API, downloaded from the
//! source, and re-published to the target's component upload endpoint.

pub mod cli;
pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;

pub use config::SyncConfig;
pub use error::{Result, SyncError};

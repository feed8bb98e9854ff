//! Business logic services.

pub mod nexus_client;
pub mod sync_service;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Resolve cache (Redis and no-op implementations)
//! - [`dns`] - Hostname resolution
//! - [`persistence`] - Mapping store implementations

pub mod cache;
pub mod dns;
pub mod persistence;

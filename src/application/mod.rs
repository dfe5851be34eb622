//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Syntax and DNS validation of submitted URLs
//! - [`services::mapping_service::MappingService`] - Idempotent creation and resolution of mappings

pub mod services;

//! Domain layer containing business entities and seams.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Mapping store trait
//! - [`resolver`] - DNS lookup trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; services in [`crate::application::services`] consume these traits.

pub mod entities;
pub mod repositories;
pub mod resolver;

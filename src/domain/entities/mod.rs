//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored original URL / short id pair
//! - [`ValidUrl`] - A submitted URL that passed validation

pub mod url_mapping;

pub use url_mapping::{UrlMapping, ValidUrl};

//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{MappingService, UrlValidator};

/// Handler state: the two core components, shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<UrlValidator>,
    pub mapping_service: Arc<MappingService>,
}

impl AppState {
    pub fn new(validator: Arc<UrlValidator>, mapping_service: Arc<MappingService>) -> Self {
        Self {
            validator,
            mapping_service,
        }
    }
}

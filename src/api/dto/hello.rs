//! DTO for the diagnostic greeting endpoint.

use serde::Serialize;

/// Fixed greeting returned by `GET /api/hello`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub greeting: &'static str,
}

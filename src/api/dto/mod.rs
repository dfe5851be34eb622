//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde; request bodies arrive URL-encoded, responses are JSON.

pub mod health;
pub mod hello;
pub mod shorturl;

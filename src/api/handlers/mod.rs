//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod hello;
pub mod redirect;
pub mod shorturl;

pub use health::health_handler;
pub use hello::hello_handler;
pub use redirect::redirect_handler;
pub use shorturl::create_short_url_handler;

//! HTTP request handlers for API endpoints.
//!
//! Handlers are thin adapters: they translate HTTP into service calls and
//! service outcomes back into HTTP.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use shorten::shorten_handler;

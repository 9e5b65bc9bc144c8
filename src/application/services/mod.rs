//! Business logic services for the application layer.

pub mod resolution_service;
pub mod shortening_service;

pub use resolution_service::{Resolution, ResolutionService};
pub use shortening_service::{
    DEFAULT_MAX_ATTEMPTS, ShortUrlCreated, ShortenError, ShorteningService, build_short_url,
};

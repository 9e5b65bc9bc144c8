//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortUrlCreated;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so a missing or `null` field reaches
/// validation and is reported as a 400 with a JSON message.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(required(message = "Missing or invalid url"))]
    pub url: Option<String>,
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
    pub code: String,
}

impl From<ShortUrlCreated> for ShortenResponse {
    fn from(created: ShortUrlCreated) -> Self {
        Self {
            short_url: created.short_url,
            long_url: created.target_url,
            code: created.code,
        }
    }
}

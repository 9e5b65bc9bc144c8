//! Mapping creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::domain::code_generator::{CodeGenError, CodeGenerator};
use crate::domain::entities::NewMapping;
use crate::domain::repositories::{CreateOutcome, MappingStore, StoreError};
use crate::utils::url_validator::{InvalidUrl, validate_target_url};

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// A successfully created short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlCreated {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

/// Failure modes of [`ShorteningService::shorten`].
///
/// A code collision is not among them: it is handled internally by drawing a
/// fresh candidate.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    /// The submitted URL was rejected before touching the store.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidUrl),

    /// Every candidate collided with an existing mapping.
    #[error("no free short code after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generator(#[from] CodeGenError),
}

/// Service for creating mappings with collision-safe code allocation.
///
/// Each attempt draws a fresh candidate and commits it with
/// [`MappingStore::create_if_absent`]. Only
/// [`CreateOutcome::AlreadyExists`] triggers another attempt; store and
/// generator failures are returned immediately.
pub struct ShorteningService<S, G>
where
    S: MappingStore + ?Sized,
    G: CodeGenerator + ?Sized,
{
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<S, G> ShorteningService<S, G>
where
    S: MappingStore + ?Sized,
    G: CodeGenerator + ?Sized,
{
    /// Creates a new shortening service.
    ///
    /// `max_attempts` below 1 is treated as 1.
    pub fn new(store: Arc<S>, generator: Arc<G>, max_attempts: usize) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns the configured attempt bound.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shortens `raw_url` and returns the public short URL under `base_url`.
    ///
    /// Exactly one mapping is created on success and none on failure.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidInput`] if `raw_url` is not a well-formed
    ///   absolute HTTP(S) URL; the store is not contacted
    /// - [`ShortenError::RetriesExhausted`] if every candidate collided
    /// - [`ShortenError::Store`] on store failure or timeout (not retried)
    /// - [`ShortenError::Generator`] if the entropy source failed (not retried)
    pub async fn shorten(
        &self,
        raw_url: &str,
        base_url: &str,
    ) -> Result<ShortUrlCreated, ShortenError> {
        validate_target_url(raw_url)?;

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate()?;

            let new_mapping = NewMapping {
                code,
                target_url: raw_url.to_string(),
                created_at: Utc::now(),
            };

            match self.store.create_if_absent(new_mapping).await? {
                CreateOutcome::Created(mapping) => {
                    debug!(code = %mapping.code, attempt, "Mapping created");

                    return Ok(ShortUrlCreated {
                        short_url: build_short_url(base_url, &mapping.code),
                        code: mapping.code,
                        target_url: mapping.target_url,
                        created_at: mapping.created_at,
                    });
                }
                CreateOutcome::AlreadyExists => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Short code collision, drawing a new candidate"
                    );
                }
            }
        }

        error!(
            attempts = self.max_attempts,
            "Short code allocation exhausted; generator may be degraded"
        );

        Err(ShortenError::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Joins `base_url` and `code` with exactly one slash.
pub fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

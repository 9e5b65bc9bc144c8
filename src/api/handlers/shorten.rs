//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_url": "https://s.example.com/aZ3kP9x",
///   "long_url": "https://example.com/some/long/path",
///   "code": "aZ3kP9x"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not JSON, or `url` is missing or not a valid absolute
///   HTTP(S) URL
/// - 500 on store failure or when no free code was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload.url.unwrap_or_default();

    let created = state
        .shortening_service
        .shorten(&long_url, &state.base_url)
        .await?;

    info!(code = %created.code, "Short URL created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

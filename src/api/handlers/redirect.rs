//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL exactly as it was
/// submitted, cache-suppressing headers and an empty body. The target is
/// looked up on every hit; intermediaries are told not to cache it.
///
/// # Errors
///
/// - 404 if no mapping exists for the code (including malformed codes and
///   paths that do not decode to UTF-8)
/// - 500 on store failure
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Ok(Path(code)) = path else {
        return Err(AppError::not_found("URL not found."));
    };

    match state.resolution_service.resolve(&code).await? {
        Resolution::Redirect(target_url) => {
            debug!(%code, "Redirecting");
            redirect_response(&target_url)
        }
        Resolution::NotFound => Err(AppError::not_found("URL not found.")),
    }
}

/// Rejects a resolve request that carries no code.
///
/// # Endpoint
///
/// `GET /`
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("Missing short code in path.")
}

/// Builds the `302 Found` response for `target_url`.
fn redirect_response(target_url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(target_url)
        .map_err(|e| AppError::internal("Internal server error", e))?;

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            ),
            (header::PRAGMA, HeaderValue::from_static("no-cache")),
            (header::EXPIRES, HeaderValue::from_static("0")),
        ],
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_response_headers() {
        let response = redirect_response("https://example.com/a?b=c").unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        let headers = response.headers();
        assert_eq!(headers[header::LOCATION], "https://example.com/a?b=c");
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers[header::PRAGMA], "no-cache");
        assert_eq!(headers[header::EXPIRES], "0");
    }

    #[test]
    fn test_redirect_response_rejects_unrepresentable_target() {
        let result = redirect_response("https://example.com/\nSet-Cookie: x=y");
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}

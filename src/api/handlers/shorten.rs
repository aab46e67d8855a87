//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base::base_url_from_request;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/a/b?x=1",
///   "expiresInDays": 14
/// }
/// ```
///
/// `expiresInDays` may be omitted or `null` for a permanent link.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortCode": "aZ3kP9q",
///   "shortUrl": "https://sho.rt/aZ3kP9q",
///   "longUrl": "https://example.com/a/b?x=1",
///   "expiresAt": "2025-03-15T12:00:00Z",
///   "createdAt": "2025-03-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for a malformed body, missing/invalid URL or invalid expiry
/// - 500 Internal Server Error on storage failures or when no unique code
///   could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    // Must fail before create_link: a rejected request writes nothing.
    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => base_url_from_request(&headers, &uri)?,
    };

    let link = state
        .link_service
        .create_link(payload.long_url(), payload.expires_in_days())
        .await?;

    let short_url = state.link_service.short_url(&base_url, &link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::new(link, short_url)),
    ))
}

//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - 302 Found with `Location` set to the stored URL
/// - 404 Not Found if the code does not exist
/// - 410 Gone if the link has expired
/// - 500 Internal Server Error on storage failures
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        tracing::debug!(code = %code, "malformed short code requested");
    }

    let long_url = state.link_service.resolve_link(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}

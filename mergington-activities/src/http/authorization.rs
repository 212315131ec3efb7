use crate::errors::api_error::ApiError;
use crate::http::app_state::AppState;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

/// The raw `Authorization` header, if present and valid UTF-8
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
}

/// Checks that the activity exists, then that the caller is logged in as a
/// teacher. Returns the teacher's username.
pub fn require_admin(
    state: &AppState,
    headers: &HeaderMap,
    activity_name: &str,
    forbidden: &str,
) -> Result<String, ApiError> {
    if !state.roster.contains(activity_name) {
        return Err(ApiError::NotFound(String::from("Activity not found")));
    }

    state
        .sessions
        .username_for(authorization_header(headers))
        .ok_or(ApiError::Forbidden(String::from(forbidden)))
}

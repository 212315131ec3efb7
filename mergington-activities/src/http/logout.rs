use crate::errors::api_error::ApiError;
use crate::http::app_state::AppState;
use crate::http::authorization::authorization_header;
use crate::sessions::parse_bearer;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use log::info;
use serde_json::json;

pub async fn logout(
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let authorization = authorization_header(&headers);
    let token = parse_bearer(authorization).ok_or(ApiError::BadRequest(String::from(
        "Missing or invalid Authorization header",
    )))?;

    if let Some(username) = state.sessions.destroy_session(token) {
        info!("{username} logged out");
    }

    Ok(Json(json!({ "message": "Logged out" })))
}

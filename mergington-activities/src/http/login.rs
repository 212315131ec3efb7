use crate::errors::api_error::ApiError;
use crate::http::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct Login {
    username: String,
    password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Login>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(teacher) = state
        .teachers
        .authenticate(&payload.username, &payload.password)
    else {
        warn!("Rejected login for {}", payload.username);
        return Err(ApiError::Unauthorized(String::from(
            "Invalid username or password",
        )));
    };

    let token = state.sessions.create_session(&teacher.username);
    info!("{} logged in", teacher.username);

    Ok(Json(json!({ "token": token })))
}

use crate::errors::api_error::ApiError;
use crate::http::app_state::AppState;
use crate::http::authorization::require_admin;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use log::info;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct Student {
    pub email: String,
}

/// Signs a student up for an activity. Restricted to logged in teachers.
pub async fn signup(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(student): Query<Student>,
) -> Result<impl IntoResponse, ApiError> {
    let teacher = require_admin(
        &state,
        &headers,
        &activity_name,
        "Admin credentials required to sign up students",
    )?;

    state.roster.signup(&activity_name, &student.email)?;
    info!("{teacher} signed up {} for {activity_name}", student.email);

    Ok(Json(json!({
        "message": format!("Signed up {} for {activity_name}", student.email)
    })))
}

use crate::errors::api_error::ApiError;
use crate::http::app_state::AppState;
use crate::http::authorization::require_admin;
use crate::http::signup::Student;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use log::info;
use serde_json::json;

/// Removes a student from an activity. Restricted to logged in teachers.
pub async fn unregister(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(student): Query<Student>,
) -> Result<impl IntoResponse, ApiError> {
    let teacher = require_admin(
        &state,
        &headers,
        &activity_name,
        "Admin credentials required to unregister students",
    )?;

    state.roster.unregister(&activity_name, &student.email)?;
    info!("{teacher} unregistered {} from {activity_name}", student.email);

    Ok(Json(json!({
        "message": format!("Unregistered {} from {activity_name}", student.email)
    })))
}

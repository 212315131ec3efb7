use crate::http::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn activities(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.roster.get_all())
}

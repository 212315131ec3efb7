#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use mergington_activities::config::Config;
use mergington_activities::credentials::Teachers;
use mergington_activities::http::{AppState, router};
use mergington_activities::models::teacher::Teacher;
use mergington_activities::roster::Roster;
use mergington_activities::sessions::SessionManager;
use serde_json::Value;
use tower::ServiceExt;

pub const USERNAME: &str = "teacher1";
pub const PASSWORD: &str = "secret";

pub fn create_test_state() -> AppState {
    let teachers = Teachers::new(vec![Teacher {
        username: String::from(USERNAME),
        password: String::from(PASSWORD),
    }]);
    AppState::new(Roster::seeded(), SessionManager::new(), teachers)
}

pub fn create_test_app(state: AppState) -> Router {
    router(state, &Config::default())
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn login(app: &Router, username: &str, password: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/admin/login")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap(),
    )
    .await
}

pub async fn login_teacher(app: &Router) -> String {
    let response = login(app, USERNAME, PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Sends a roster mutation, optionally with `Authorization: Bearer <token>`
pub async fn roster_request(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn participants(app: &Router, activity_name: &str) -> Vec<String> {
    let response = send(
        app,
        Request::builder()
            .uri("/activities")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await[activity_name]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

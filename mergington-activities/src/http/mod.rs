use crate::config::Config;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use hyper::{Request, body::Incoming};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server,
};
use log::{error, info};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_service::Service;

pub use app_state::AppState;

mod activities;
pub mod app_state;
mod authorization;
mod login;
mod logout;
mod signup;
mod unregister;

/// Builds the application routes
pub fn router(state: AppState, config: &Config) -> Router {
    let admin_routes = Router::new()
        .route("/login", post(login::login))
        .route("/logout", post(logout::logout));

    let app = Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(activities::activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister::unregister),
        )
        .nest("/admin", admin_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state);

    match &config.frontend_url {
        Some(frontend_url) => app.layer(
            CorsLayer::new()
                .allow_origin(frontend_url.clone())
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE]),
        ),
        None => app,
    }
}

/// Starts the HTTP server with hyper, one task per connection
pub async fn listen(config: Config, state: AppState) -> std::io::Result<()> {
    let app = router(state, &config);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    info!("HTTP server listening on {}", listener.local_addr()?);

    loop {
        let (socket, _remote_addr) = match listener.accept().await {
            Ok(listener) => listener,
            Err(error) => {
                error!("Could not get socket from accepted HTTP connection: {error}");
                continue;
            }
        };

        let tower_service = app.clone();
        tokio::spawn(async move {
            let socket = TokioIo::new(socket);
            let hyper_service = hyper::service::service_fn(move |request: Request<Incoming>| {
                tower_service.clone().call(request)
            });

            if let Err(err) = server::conn::auto::Builder::new(TokioExecutor::new())
                .serve_connection_with_upgrades(socket, hyper_service)
                .await
            {
                error!("Failed to serve connection: {err:#}");
            }
        });
    }
}

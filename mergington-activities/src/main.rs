use dotenvy::dotenv;
use env_logger::Env;
use log::error;
use mergington_activities::config::Config;
use mergington_activities::credentials::Teachers;
use mergington_activities::http::{self, AppState};
use mergington_activities::roster::Roster;
use mergington_activities::sessions::SessionManager;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let teachers = Teachers::load(&config.teachers_file);
    let state = AppState::new(Roster::seeded(), SessionManager::new(), teachers);

    if let Err(error) = http::listen(config, state).await {
        error!("Could not start HTTP server: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

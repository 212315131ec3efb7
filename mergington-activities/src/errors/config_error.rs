use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
    #[error("FRONTEND_URL could not be converted to a header: {0}")]
    InvalidFrontendUrl(String),
}

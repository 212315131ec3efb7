use crate::errors::config_error::ConfigError;
use axum::http::HeaderValue;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub teachers_file: PathBuf,
    pub static_dir: PathBuf,
    pub frontend_url: Option<HeaderValue>,
}

impl Config {
    /// Reads settings from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .or(Err(ConfigError::InvalidPort(port)))?,
            None => DEFAULT_PORT,
        };

        let frontend_url = lookup("FRONTEND_URL")
            .map(|url| {
                url.parse::<HeaderValue>()
                    .or(Err(ConfigError::InvalidFrontendUrl(url)))
            })
            .transpose()?;

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| String::from(DEFAULT_HOST)),
            port,
            teachers_file: lookup("TEACHERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("teachers.json")),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            frontend_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            teachers_file: PathBuf::from("teachers.json"),
            static_dir: PathBuf::from("static"),
            frontend_url: None,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Could not read teachers file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse teachers file: {0}")]
    Parse(#[from] serde_json::Error),
}

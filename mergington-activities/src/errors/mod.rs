pub mod api_error;
pub mod config_error;
pub mod credential_error;
pub mod roster_error;

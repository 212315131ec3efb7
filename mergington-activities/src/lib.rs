pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod models;
pub mod roster;
pub mod sessions;

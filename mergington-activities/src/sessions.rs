use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Admin session tokens mapped to the teacher who logged in.
///
/// Tokens don't expire; they live until logout or process exit.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: Mutex<HashMap<String, String>>,
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// The scheme is case-insensitive and the token is trimmed.
pub fn parse_bearer(authorization: Option<&str>) -> Option<&str> {
    let authorization = authorization?;
    let scheme = authorization.get(..7)?;
    if !scheme.eq_ignore_ascii_case("bearer ") {
        return None;
    }

    Some(authorization[7..].trim())
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_session(&self, username: &str) -> String {
        let token: u128 = rand::rng().random();
        let token = format!("{token:032x}");

        self.lock().insert(token.clone(), username.to_string());
        token
    }

    pub fn is_valid(&self, authorization: Option<&str>) -> bool {
        self.username_for(authorization).is_some()
    }

    pub fn username_for(&self, authorization: Option<&str>) -> Option<String> {
        let token = parse_bearer(authorization)?;
        self.lock().get(token).cloned()
    }

    /// Returns the username the token belonged to, if it was still live
    pub fn destroy_session(&self, token: &str) -> Option<String> {
        self.lock().remove(token)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

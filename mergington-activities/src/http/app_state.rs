use crate::credentials::Teachers;
use crate::roster::Roster;
use crate::sessions::SessionManager;
use std::sync::Arc;

/// Shared by every request handler for the life of the process
#[derive(Debug, Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
    pub sessions: Arc<SessionManager>,
    pub teachers: Arc<Teachers>,
}

impl AppState {
    pub fn new(roster: Roster, sessions: SessionManager, teachers: Teachers) -> Self {
        AppState {
            roster: Arc::new(roster),
            sessions: Arc::new(sessions),
            teachers: Arc::new(teachers),
        }
    }
}

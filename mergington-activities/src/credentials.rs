use crate::errors::credential_error::CredentialError;
use crate::models::teacher::{Teacher, TeacherEntry, TeachersFile};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Teacher credentials, loaded once at startup
#[derive(Debug, Default, Clone)]
pub struct Teachers {
    teachers: Vec<Teacher>,
}

impl Teachers {
    pub fn new(teachers: Vec<Teacher>) -> Self {
        Teachers { teachers }
    }

    /// Loads teachers from `path`. Any failure leaves the list empty so every
    /// login is rejected.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!(
                "Teachers file {} not found, admin logins are disabled",
                path.display()
            );
            return Teachers::default();
        }

        match read_teachers(path) {
            Ok(teachers) => {
                info!("Loaded {} teachers from {}", teachers.len(), path.display());
                Teachers::new(teachers)
            }
            Err(error) => {
                warn!("{error}, admin logins are disabled");
                Teachers::default()
            }
        }
    }

    /// First exact match on both fields wins
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Teacher> {
        self.teachers
            .iter()
            .find(|t| t.username == username && t.password == password)
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

fn read_teachers(path: &Path) -> Result<Vec<Teacher>, CredentialError> {
    let contents = fs::read_to_string(path)?;
    let file: TeachersFile = serde_json::from_str(&contents)?;
    let entries = file.teachers.len();
    let teachers: Vec<Teacher> = file
        .teachers
        .into_iter()
        .filter_map(TeacherEntry::into_teacher)
        .collect();

    if teachers.len() < entries {
        warn!(
            "Skipped {} incomplete entries in {}",
            entries - teachers.len(),
            path.display()
        );
    }
    Ok(teachers)
}

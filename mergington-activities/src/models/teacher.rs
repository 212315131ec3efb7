use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub username: String,
    pub password: String,
}

/// One entry of the teachers document. Entries missing a field are kept
/// out of the credential list instead of invalidating the whole file.
#[derive(Debug, Deserialize)]
pub struct TeacherEntry {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Layout of the teachers document on disk
#[derive(Debug, Default, Deserialize)]
pub struct TeachersFile {
    #[serde(default)]
    pub teachers: Vec<TeacherEntry>,
}

impl TeacherEntry {
    pub fn into_teacher(self) -> Option<Teacher> {
        Some(Teacher {
            username: self.username?,
            password: self.password?,
        })
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

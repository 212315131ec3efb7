use crate::errors::roster_error::RosterError;
use crate::models::activity::Activity;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod seed;

/// Activities and their participants.
///
/// Every membership check happens in the same critical section as the
/// mutation it guards, so concurrent signups for the same student can't
/// both succeed.
#[derive(Debug)]
pub struct Roster {
    activities: Mutex<Vec<Activity>>,
}

/// Owned copy of the roster, serialized as a map keyed by activity name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot(pub Vec<Activity>);

impl Roster {
    pub fn new(activities: Vec<Activity>) -> Self {
        Roster {
            activities: Mutex::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Roster::new(seed::activities())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Activity>> {
        self.activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_all(&self) -> RosterSnapshot {
        RosterSnapshot(self.lock().clone())
    }

    pub fn contains(&self, activity_name: &str) -> bool {
        self.lock().iter().any(|a| a.name == activity_name)
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.lock();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.lock();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(())
    }
}

impl RosterSnapshot {
    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == activity_name)
    }
}

impl Serialize for RosterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

//! Contact submission model shared between the persistence layer and the
//! admin dashboard API.

use crate::model::UnknownStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A general inquiry message sent through the public contact form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submission_date: NaiveDateTime,
    pub status: ContactStatus,
}

/// Review state of a contact submission.
///
/// The state only moves forward: `New -> Read` and `New|Read -> Replied`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }

    /// Whether moving to `next` is a forward transition.
    pub fn can_transition_to(self, next: ContactStatus) -> bool {
        matches!(
            (self, next),
            (ContactStatus::New, ContactStatus::Read)
                | (ContactStatus::New, ContactStatus::Replied)
                | (ContactStatus::Read, ContactStatus::Replied)
        )
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ContactStatus::New),
            "read" => Ok(ContactStatus::Read),
            "replied" => Ok(ContactStatus::Replied),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

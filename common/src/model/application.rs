//! Admission application model and the derived application number.

use crate::model::UnknownStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structured enrollment request with applicant identity and course choice.
///
/// The `application_number` is derived from the admission year and the row id
/// once the id is known, and never changes afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdmissionApplication {
    pub id: i64,
    pub application_number: String,
    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    pub cnic: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub address: String,
    pub education: String,
    pub course: String,
    pub application_date: NaiveDateTime,
    pub status: ApplicationStatus,
}

/// Decision state of an admission application.
///
/// `Pending` may become `Approved` or `Rejected`; both outcomes are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Whether moving to `next` is an allowed decision.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (ApplicationStatus::Pending, ApplicationStatus::Approved)
                | (ApplicationStatus::Pending, ApplicationStatus::Rejected)
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Builds the human-readable application number, e.g. `VIU-2024-000001`.
pub fn application_number(year: i32, id: i64) -> String {
    format!("VIU-{}-{:06}", year, id)
}

/// Maps a course identifier to its display name for outbound messages.
/// Unknown identifiers pass through unchanged.
pub fn course_display_name(course: &str) -> &str {
    match course {
        "quran" => "فہم القرآن",
        "arabic" => "اللغة العربية",
        "islamic-studies" => "علوم الدین",
        other => other,
    }
}

pub mod application;
pub mod contact;

use std::error::Error;
use std::fmt;

/// Error returned when a stored status string does not name a known variant.
#[derive(Debug, Clone)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status value: {}", self.0)
    }
}

impl Error for UnknownStatus {}

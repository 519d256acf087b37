//! Format validation for the public form fields.
//!
//! Pure predicates over precompiled patterns; normalization (trimming,
//! lower-casing email) is the caller's business.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

// CNIC: 5 digits, 7 digits, 1 check digit, hyphen separated.
static CNIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{7}-\d{1}$").expect("valid CNIC pattern"));

// Pakistani mobile numbers in international form.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+92[0-9]{10}$").expect("valid phone pattern"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_cnic(cnic: &str) -> bool {
    CNIC_RE.is_match(cnic)
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

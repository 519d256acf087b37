//! Persistence layer: schema creation and all reads/writes for the two
//! tables, `contact_submissions` and `admission_applications`.
//!
//! Connections are opened per operation from the configured database path.
//! The admission uniqueness rule is enforced twice on purpose: a pre-check
//! inside the insert transaction gives the friendly duplicate answer, and the
//! UNIQUE constraints behind it keep concurrent workers honest.

pub mod applications;
pub mod contacts;

use crate::config::AppConfig;
use rusqlite::Connection;

pub fn open(cfg: &AppConfig) -> rusqlite::Result<Connection> {
    Connection::open(&cfg.database_path)
}

/// Creates the tables if they do not exist yet. Called once at startup.
pub fn init_db(cfg: &AppConfig) -> rusqlite::Result<()> {
    let conn = open(cfg)?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS contact_submissions (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL,
            subject         TEXT NOT NULL,
            message         TEXT NOT NULL,
            submission_date TEXT NOT NULL,
            status          TEXT NOT NULL DEFAULT 'new'
        );
        CREATE TABLE IF NOT EXISTS admission_applications (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name         TEXT NOT NULL,
            last_name          TEXT NOT NULL,
            father_name        TEXT NOT NULL,
            cnic               TEXT NOT NULL UNIQUE,
            email              TEXT NOT NULL UNIQUE,
            phone              TEXT NOT NULL,
            date_of_birth      TEXT NOT NULL,
            gender             TEXT NOT NULL,
            address            TEXT NOT NULL,
            education          TEXT NOT NULL,
            course             TEXT NOT NULL,
            application_date   TEXT NOT NULL,
            status             TEXT NOT NULL DEFAULT 'pending',
            application_number TEXT UNIQUE
        );",
    )
}

/// SQL offset of a 1-indexed page; out-of-range pages simply read past the
/// end and come back empty.
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    i64::from(page.saturating_sub(1)) * i64::from(per_page)
}

/// True when the error is a UNIQUE-constraint violation, which the admission
/// flow reports as a duplicate rather than a server error.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::page_offset;

    #[test]
    fn page_one_starts_at_zero() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(3, 25), 50);
        // page 0 is treated as page 1
        assert_eq!(page_offset(0, 10), 0);
    }
}

//! Reads and writes for the `contact_submissions` table.

use crate::db::page_offset;
use chrono::Utc;
use common::model::contact::{ContactStatus, ContactSubmission};
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, name, email, subject, message, submission_date, status";

fn from_row(row: &Row) -> rusqlite::Result<ContactSubmission> {
    let status: String = row.get(6)?;
    Ok(ContactSubmission {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        subject: row.get(3)?,
        message: row.get(4)?,
        submission_date: row.get(5)?,
        status: status.parse().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?,
    })
}

/// Inserts a new submission with status `new` and returns its id.
pub fn insert(
    conn: &Connection,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO contact_submissions (name, email, subject, message, submission_date, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            name,
            email,
            subject,
            message,
            Utc::now().naive_utc(),
            ContactStatus::New.as_str()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: i64) -> rusqlite::Result<Option<ContactSubmission>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = ?1"),
        params![id],
        from_row,
    )
    .optional()
}

/// Newest-first page of submissions plus the total count for the filter.
pub fn list(
    conn: &Connection,
    status: Option<ContactStatus>,
    page: u32,
    per_page: u32,
) -> rusqlite::Result<(Vec<ContactSubmission>, i64)> {
    let offset = page_offset(page, per_page);
    match status {
        Some(st) => {
            let total = conn.query_row(
                "SELECT COUNT(*) FROM contact_submissions WHERE status = ?1",
                params![st.as_str()],
                |row| row.get(0),
            )?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM contact_submissions WHERE status = ?1
                 ORDER BY submission_date DESC, id DESC LIMIT ?2 OFFSET ?3"
            ))?;
            let rows = stmt
                .query_map(params![st.as_str(), per_page, offset], from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok((rows, total))
        }
        None => {
            let total = conn.query_row("SELECT COUNT(*) FROM contact_submissions", [], |row| {
                row.get(0)
            })?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM contact_submissions
                 ORDER BY submission_date DESC, id DESC LIMIT ?1 OFFSET ?2"
            ))?;
            let rows = stmt
                .query_map(params![per_page, offset], from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok((rows, total))
        }
    }
}

/// Overwrites the status; transition rules are checked by the caller against
/// the freshly read record. Returns false when the id is unknown.
pub fn update_status(conn: &Connection, id: i64, status: ContactStatus) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE contact_submissions SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(changed > 0)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "DELETE FROM contact_submissions WHERE id = ?1",
        params![id],
    )?;
    Ok(changed > 0)
}

/// Count of submissions, optionally restricted to one status.
pub fn count(conn: &Connection, status: Option<ContactStatus>) -> rusqlite::Result<i64> {
    match status {
        Some(st) => conn.query_row(
            "SELECT COUNT(*) FROM contact_submissions WHERE status = ?1",
            params![st.as_str()],
            |row| row.get(0),
        ),
        None => conn.query_row("SELECT COUNT(*) FROM contact_submissions", [], |row| {
            row.get(0)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::db;

    fn test_conn() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = AppConfig::load();
        cfg.database_path = dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .into_owned();
        db::init_db(&cfg).unwrap();
        let conn = db::open(&cfg).unwrap();
        (dir, conn)
    }

    #[test]
    fn insert_creates_a_new_row() {
        let (_dir, conn) = test_conn();
        let id = insert(&conn, "Ali", "ali@example.com", "Fees", "How much?").unwrap();
        let row = get(&conn, id).unwrap().unwrap();
        assert_eq!(row.status, ContactStatus::New);
        assert_eq!(row.email, "ali@example.com");
        assert_eq!(count(&conn, Some(ContactStatus::New)).unwrap(), 1);
    }

    #[test]
    fn unknown_ids_read_as_none_and_update_as_false() {
        let (_dir, conn) = test_conn();
        assert!(get(&conn, 99).unwrap().is_none());
        assert!(!update_status(&conn, 99, ContactStatus::Read).unwrap());
        assert!(!delete(&conn, 99).unwrap());
    }

    #[test]
    fn status_updates_are_visible() {
        let (_dir, conn) = test_conn();
        let id = insert(&conn, "Sara", "sara@example.com", "Hi", "Salam").unwrap();
        assert!(update_status(&conn, id, ContactStatus::Read).unwrap());
        assert_eq!(get(&conn, id).unwrap().unwrap().status, ContactStatus::Read);
    }

    #[test]
    fn pages_partition_the_result_set() {
        let (_dir, conn) = test_conn();
        for i in 0..25 {
            insert(
                &conn,
                &format!("user{i}"),
                &format!("user{i}@example.com"),
                "s",
                "m",
            )
            .unwrap();
        }

        let mut seen = Vec::new();
        for page in 1..=3 {
            let (rows, total) = list(&conn, None, page, 10).unwrap();
            assert_eq!(total, 25);
            assert!(rows.len() <= 10);
            seen.extend(rows.into_iter().map(|c| c.id));
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 25);

        // Out-of-range page is empty, not an error.
        let (rows, total) = list(&conn, None, 7, 10).unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 25);
    }

    #[test]
    fn listing_is_newest_first() {
        let (_dir, conn) = test_conn();
        let first = insert(&conn, "a", "a@example.com", "s", "m").unwrap();
        let second = insert(&conn, "b", "b@example.com", "s", "m").unwrap();
        let (rows, _) = list(&conn, None, 1, 10).unwrap();
        assert_eq!(rows[0].id, second);
        assert_eq!(rows[1].id, first);
    }

    #[test]
    fn status_filter_restricts_rows() {
        let (_dir, conn) = test_conn();
        let a = insert(&conn, "a", "a@example.com", "s", "m").unwrap();
        insert(&conn, "b", "b@example.com", "s", "m").unwrap();
        update_status(&conn, a, ContactStatus::Replied).unwrap();

        let (rows, total) = list(&conn, Some(ContactStatus::Replied), 1, 10).unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, a);
    }
}

//! Reads and writes for the `admission_applications` table.
//!
//! The insert is two-phase inside one transaction: the row is written to
//! obtain its id, the application number derived from that id is set, and
//! only then does the transaction commit. The duplicate pre-check runs in
//! the same transaction; a UNIQUE-constraint violation from a concurrent
//! insert is reported the same way as a pre-check hit.

use crate::db::{is_unique_violation, page_offset};
use chrono::{Datelike, NaiveDate, Utc};
use common::model::application::{
    application_number, AdmissionApplication, ApplicationStatus,
};
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, application_number, first_name, last_name, father_name, cnic, email, \
                       phone, date_of_birth, gender, address, education, course, \
                       application_date, status";

/// Validated applicant data, ready for insertion.
pub struct NewApplication {
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
}

fn from_row(row: &Row) -> rusqlite::Result<AdmissionApplication> {
    let status: String = row.get(14)?;
    Ok(AdmissionApplication {
        id: row.get(0)?,
        application_number: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        father_name: row.get(4)?,
        cnic: row.get(5)?,
        email: row.get(6)?,
        phone: row.get(7)?,
        date_of_birth: row.get(8)?,
        gender: row.get(9)?,
        address: row.get(10)?,
        education: row.get(11)?,
        course: row.get(12)?,
        application_date: row.get(13)?,
        status: status.parse().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(14, rusqlite::types::Type::Text, Box::new(e))
        })?,
    })
}

/// Inserts an application and assigns its application number.
///
/// Returns `Ok(None)` when another application already holds the CNIC or the
/// email, whether found by the pre-check or by the UNIQUE constraints.
pub fn insert(
    conn: &mut Connection,
    app: &NewApplication,
) -> rusqlite::Result<Option<AdmissionApplication>> {
    let tx = conn.transaction()?;

    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM admission_applications WHERE cnic = ?1 OR email = ?2",
            params![app.cnic, app.email],
            |row| row.get(0),
        )
        .optional()?;
    if existing.is_some() {
        return Ok(None);
    }

    let now = Utc::now().naive_utc();
    let inserted = tx.execute(
        "INSERT INTO admission_applications
             (first_name, last_name, father_name, cnic, email, phone, date_of_birth,
              gender, address, education, course, application_date, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            app.first_name,
            app.last_name,
            app.father_name,
            app.cnic,
            app.email,
            app.phone,
            app.date_of_birth,
            app.gender,
            app.address,
            app.education,
            app.course,
            now,
            ApplicationStatus::Pending.as_str()
        ],
    );
    if let Err(e) = inserted {
        return if is_unique_violation(&e) { Ok(None) } else { Err(e) };
    }

    let id = tx.last_insert_rowid();
    let number = application_number(now.year(), id);
    tx.execute(
        "UPDATE admission_applications SET application_number = ?1 WHERE id = ?2",
        params![number, id],
    )?;
    tx.commit()?;

    Ok(Some(AdmissionApplication {
        id,
        application_number: number,
        first_name: app.first_name.clone(),
        last_name: app.last_name.clone(),
        father_name: app.father_name.clone(),
        cnic: app.cnic.clone(),
        email: app.email.clone(),
        phone: app.phone.clone(),
        date_of_birth: app.date_of_birth,
        gender: app.gender.clone(),
        address: app.address.clone(),
        education: app.education.clone(),
        course: app.course.clone(),
        application_date: now,
        status: ApplicationStatus::Pending,
    }))
}

pub fn get(conn: &Connection, id: i64) -> rusqlite::Result<Option<AdmissionApplication>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM admission_applications WHERE id = ?1"),
        params![id],
        from_row,
    )
    .optional()
}

/// Newest-first page of applications plus the total count for the filter.
pub fn list(
    conn: &Connection,
    status: Option<ApplicationStatus>,
    page: u32,
    per_page: u32,
) -> rusqlite::Result<(Vec<AdmissionApplication>, i64)> {
    let offset = page_offset(page, per_page);
    match status {
        Some(st) => {
            let total = conn.query_row(
                "SELECT COUNT(*) FROM admission_applications WHERE status = ?1",
                params![st.as_str()],
                |row| row.get(0),
            )?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM admission_applications WHERE status = ?1
                 ORDER BY application_date DESC, id DESC LIMIT ?2 OFFSET ?3"
            ))?;
            let rows = stmt
                .query_map(params![st.as_str(), per_page, offset], from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok((rows, total))
        }
        None => {
            let total = conn.query_row("SELECT COUNT(*) FROM admission_applications", [], |row| {
                row.get(0)
            })?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM admission_applications
                 ORDER BY application_date DESC, id DESC LIMIT ?1 OFFSET ?2"
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
pub fn update_status(
    conn: &Connection,
    id: i64,
    status: ApplicationStatus,
) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE admission_applications SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(changed > 0)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "DELETE FROM admission_applications WHERE id = ?1",
        params![id],
    )?;
    Ok(changed > 0)
}

/// Count of applications, optionally restricted to one status.
pub fn count(conn: &Connection, status: Option<ApplicationStatus>) -> rusqlite::Result<i64> {
    match status {
        Some(st) => conn.query_row(
            "SELECT COUNT(*) FROM admission_applications WHERE status = ?1",
            params![st.as_str()],
            |row| row.get(0),
        ),
        None => conn.query_row("SELECT COUNT(*) FROM admission_applications", [], |row| {
            row.get(0)
        }),
    }
}

/// Number of applications per course, for the dashboard statistics.
pub fn course_distribution(conn: &Connection) -> rusqlite::Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT course, COUNT(*) FROM admission_applications GROUP BY course ORDER BY course",
    )?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
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

    fn sample(cnic: &str, email: &str) -> NewApplication {
        NewApplication {
            first_name: "Ali".into(),
            last_name: "Khan".into(),
            father_name: "Ahmed Khan".into(),
            cnic: cnic.into(),
            email: email.into(),
            phone: "+923001234567".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 15).unwrap(),
            gender: "male".into(),
            address: "Lahore".into(),
            education: "intermediate".into(),
            course: "quran".into(),
        }
    }

    #[test]
    fn insert_assigns_a_derived_application_number() {
        let (_dir, mut conn) = test_conn();
        let app = insert(&mut conn, &sample("12345-1234567-1", "ali@example.com"))
            .unwrap()
            .unwrap();
        let year = Utc::now().year();
        assert_eq!(app.application_number, format!("VIU-{year}-{:06}", app.id));
        assert_eq!(app.status, ApplicationStatus::Pending);

        // Round-trips through the store unchanged.
        let stored = get(&conn, app.id).unwrap().unwrap();
        assert_eq!(stored.application_number, app.application_number);
        assert_eq!(stored.date_of_birth, app.date_of_birth);
    }

    #[test]
    fn duplicate_cnic_or_email_is_refused() {
        let (_dir, mut conn) = test_conn();
        insert(&mut conn, &sample("12345-1234567-1", "ali@example.com"))
            .unwrap()
            .unwrap();

        // Same email, different CNIC.
        assert!(insert(&mut conn, &sample("99999-9999999-9", "ali@example.com"))
            .unwrap()
            .is_none());
        // Same CNIC, different email.
        assert!(insert(&mut conn, &sample("12345-1234567-1", "other@example.com"))
            .unwrap()
            .is_none());
        // No extra row was written.
        assert_eq!(count(&conn, None).unwrap(), 1);
    }

    #[test]
    fn status_filter_and_counts_agree() {
        let (_dir, mut conn) = test_conn();
        let a = insert(&mut conn, &sample("11111-1111111-1", "a@example.com"))
            .unwrap()
            .unwrap();
        insert(&mut conn, &sample("22222-2222222-2", "b@example.com"))
            .unwrap()
            .unwrap();
        update_status(&conn, a.id, ApplicationStatus::Approved).unwrap();

        assert_eq!(count(&conn, Some(ApplicationStatus::Pending)).unwrap(), 1);
        assert_eq!(count(&conn, Some(ApplicationStatus::Approved)).unwrap(), 1);
        assert_eq!(count(&conn, Some(ApplicationStatus::Rejected)).unwrap(), 0);

        let (rows, total) = list(&conn, Some(ApplicationStatus::Approved), 1, 10).unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows[0].id, a.id);
    }

    #[test]
    fn course_distribution_groups_rows() {
        let (_dir, mut conn) = test_conn();
        let mut app = sample("11111-1111111-1", "a@example.com");
        app.course = "arabic".into();
        insert(&mut conn, &app).unwrap().unwrap();
        insert(&mut conn, &sample("22222-2222222-2", "b@example.com"))
            .unwrap()
            .unwrap();
        insert(&mut conn, &sample("33333-3333333-3", "c@example.com"))
            .unwrap()
            .unwrap();

        let dist = course_distribution(&conn).unwrap();
        assert_eq!(dist, vec![("arabic".into(), 1), ("quran".into(), 2)]);
    }

    #[test]
    fn delete_removes_the_row() {
        let (_dir, mut conn) = test_conn();
        let app = insert(&mut conn, &sample("11111-1111111-1", "a@example.com"))
            .unwrap()
            .unwrap();
        assert!(delete(&conn, app.id).unwrap());
        assert!(get(&conn, app.id).unwrap().is_none());
        assert!(!delete(&conn, app.id).unwrap());
    }
}

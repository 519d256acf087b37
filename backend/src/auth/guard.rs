//! Per-request gate for admin endpoints.
//!
//! [`AdminSession`] is an extractor: a handler that takes it as a parameter
//! only runs for a logged-in admin whose session is within the inactivity
//! window. Every admitted request refreshes the activity timestamp, and a
//! rejected session is purged so a retry with the same cookie fails too.

use crate::config::AppConfig;
use crate::error::{ApiError, AuthReason};
use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::{DateTime, Utc};
use std::future::{ready, Ready};

pub const LOGGED_IN_KEY: &str = "admin_logged_in";
pub const USERNAME_KEY: &str = "admin_username";
pub const LOGIN_TIME_KEY: &str = "login_time";
pub const LAST_ACTIVITY_KEY: &str = "last_activity";

const DEFAULT_TIMEOUT_SECS: i64 = 1800;

/// Proof of an authenticated, still-active admin session.
#[derive(Debug)]
pub struct AdminSession {
    pub username: String,
}

impl FromRequest for AdminSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, ApiError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let timeout_secs = req
            .app_data::<web::Data<AppConfig>>()
            .map(|cfg| cfg.session_timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        ready(authorize(&req.get_session(), timeout_secs))
    }
}

/// Runs the full gate: logged-in flag, timestamp sanity, inactivity window.
///
/// Also used directly by the embedded-page handler to gate the dashboard
/// page with a redirect instead of a JSON error.
pub fn authorize(session: &Session, timeout_secs: i64) -> Result<AdminSession, ApiError> {
    let logged_in = session
        .get::<bool>(LOGGED_IN_KEY)
        .ok()
        .flatten()
        .unwrap_or(false);
    if !logged_in {
        return Err(ApiError::Auth(AuthReason::NotLoggedIn));
    }

    if let Some(last_activity) = session.get::<String>(LAST_ACTIVITY_KEY).ok().flatten() {
        match is_expired(&last_activity, Utc::now(), timeout_secs) {
            Ok(false) => {}
            Ok(true) => {
                session.purge();
                return Err(ApiError::Auth(AuthReason::SessionExpired));
            }
            Err(_) => {
                session.purge();
                return Err(ApiError::Auth(AuthReason::InvalidSession));
            }
        }
        let _ = session.insert(LAST_ACTIVITY_KEY, Utc::now().to_rfc3339());
    }

    let username = session
        .get::<String>(USERNAME_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    Ok(AdminSession { username })
}

fn is_expired(
    last_activity: &str,
    now: DateTime<Utc>,
    timeout_secs: i64,
) -> Result<bool, chrono::ParseError> {
    let last = DateTime::parse_from_rfc3339(last_activity)?.with_timezone(&Utc);
    Ok(now.signed_duration_since(last).num_seconds() > timeout_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use chrono::Duration;

    #[test]
    fn fresh_timestamps_are_not_expired() {
        let now = Utc::now();
        assert!(!is_expired(&now.to_rfc3339(), now, 1800).unwrap());
        let recent = now - Duration::seconds(1799);
        assert!(!is_expired(&recent.to_rfc3339(), now, 1800).unwrap());
    }

    #[test]
    fn old_timestamps_are_expired() {
        let now = Utc::now();
        let old = now - Duration::seconds(1801);
        assert!(is_expired(&old.to_rfc3339(), now, 1800).unwrap());
    }

    #[test]
    fn garbage_timestamps_are_an_error() {
        assert!(is_expired("not-a-timestamp", Utc::now(), 1800).is_err());
    }

    #[test]
    fn gate_rejects_a_logged_out_session() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        let err = authorize(&session, 1800).unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthReason::NotLoggedIn)));
    }

    #[test]
    fn gate_expires_and_purges_an_idle_session() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        session.insert(LOGGED_IN_KEY, true).unwrap();
        session.insert(USERNAME_KEY, "admin").unwrap();
        let stale = (Utc::now() - Duration::seconds(2000)).to_rfc3339();
        session.insert(LAST_ACTIVITY_KEY, stale).unwrap();

        let err = authorize(&session, 1800).unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthReason::SessionExpired)));
        // The purge makes a retry with the same session fail as logged out.
        let err = authorize(&session, 1800).unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthReason::NotLoggedIn)));
    }

    #[test]
    fn gate_rejects_a_malformed_timestamp() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        session.insert(LOGGED_IN_KEY, true).unwrap();
        session.insert(LAST_ACTIVITY_KEY, "garbage").unwrap();

        let err = authorize(&session, 1800).unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthReason::InvalidSession)));
    }

    #[test]
    fn gate_admits_and_refreshes_an_active_session() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        session.insert(LOGGED_IN_KEY, true).unwrap();
        session.insert(USERNAME_KEY, "admin").unwrap();
        let recent = (Utc::now() - Duration::seconds(60)).to_rfc3339();
        session.insert(LAST_ACTIVITY_KEY, recent.clone()).unwrap();

        let admin = authorize(&session, 1800).unwrap();
        assert_eq!(admin.username, "admin");
        let refreshed = session
            .get::<String>(LAST_ACTIVITY_KEY)
            .unwrap()
            .unwrap();
        assert_ne!(refreshed, recent);
    }
}

//! Error taxonomy shared by all route handlers.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; the
//! `ResponseError` impl renders the uniform `{"success": false, ...}` JSON
//! body the dashboard and the public pages expect. Storage failures keep
//! their cause out of the response and in the log.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

/// Machine-readable cause attached to a 401 response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthReason {
    NotLoggedIn,
    SessionExpired,
    InvalidSession,
}

impl AuthReason {
    pub fn code(self) -> &'static str {
        match self {
            AuthReason::NotLoggedIn => "not_logged_in",
            AuthReason::SessionExpired => "session_expired",
            AuthReason::InvalidSession => "invalid_session",
        }
    }

    fn message(self) -> &'static str {
        match self {
            AuthReason::NotLoggedIn => "Unauthorized access. Please login as admin.",
            AuthReason::SessionExpired => "Session expired. Please login again.",
            AuthReason::InvalidSession => "Invalid session. Please login again.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field; message is shown to the user.
    #[error("{0}")]
    Validation(String),

    /// An application with the same CNIC or email already exists.
    #[error("اس CNIC یا ای میل سے پہلے سے درخواست موجود ہے")]
    DuplicateApplication,

    /// Wrong admin credentials at login.
    #[error("غلط یوزر نیم یا پاس ورڈ")]
    BadCredentials,

    /// Missing, expired or invalid admin session on a protected route.
    #[error("{}", .0.message())]
    Auth(AuthReason),

    /// Unknown record id on an admin mutation.
    #[error("ریکارڈ موجود نہیں")]
    NotFound,

    /// Storage failure; cause is logged, caller sees a generic message.
    #[error("سرور میں خرابی، براہ کرم دوبارہ کوشش کریں")]
    Storage(#[from] rusqlite::Error),

    /// Mail delivery failure in a flow where delivery gates the outcome.
    #[error("{0}")]
    MailDelivery(String),

    /// Session store or other unexpected internal failure.
    #[error("سرور میں خرابی")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::DuplicateApplication => StatusCode::BAD_REQUEST,
            ApiError::BadCredentials | ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::MailDelivery(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Storage(cause) => error!("storage error: {}", cause),
            ApiError::Internal(cause) => error!("internal error: {}", cause),
            _ => {}
        }

        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        if let ApiError::Auth(reason) = self {
            body["reason"] = json!(reason.code());
            body["redirect"] = json!("/admin_login.html");
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn auth_errors_carry_reason_and_redirect() {
        let resp = ApiError::Auth(AuthReason::SessionExpired).error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["reason"], "session_expired");
        assert_eq!(value["redirect"], "/admin_login.html");
        assert_eq!(value["success"], false);
    }

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DuplicateApplication.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MailDelivery("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

use crate::auth::guard;
use crate::config::AppConfig;
use crate::error::ApiError;
use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::requests::LoginRequest;
use log::info;
use serde_json::json;

pub(crate) async fn process(
    cfg: web::Data<AppConfig>,
    session: Session,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let creds = payload.into_inner();
    if creds.username.trim().is_empty() || creds.password.is_empty() {
        return Err(ApiError::Validation(
            "براہ کرم یوزر نیم اور پاس ورڈ درج کریں".to_string(),
        ));
    }

    let username = creds.username.trim();
    if username != cfg.admin_username || creds.password != cfg.admin_password {
        return Err(ApiError::BadCredentials);
    }

    let now = Utc::now().to_rfc3339();
    session
        .insert(guard::LOGGED_IN_KEY, true)
        .and_then(|_| session.insert(guard::USERNAME_KEY, username))
        .and_then(|_| session.insert(guard::LOGIN_TIME_KEY, &now))
        .and_then(|_| session.insert(guard::LAST_ACTIVITY_KEY, &now))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    info!("admin {username} logged in");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "کامیابی سے لاگ ان ہو گئے",
        "redirect": "/admin_dashboard.html"
    })))
}

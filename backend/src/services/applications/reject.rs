use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use crate::mail::{templates, Mailer};
use actix_web::{web, HttpResponse};
use common::model::application::ApplicationStatus;
use common::requests::RejectRequest;
use log::{info, warn};
use serde_json::json;

const DEFAULT_REASON: &str = "شرائط پوری نہیں ہونا";

pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
    mailer: web::Data<Mailer>,
    path: web::Path<i64>,
    // The body is optional; a bare POST rejects with the default reason.
    payload: Option<web::Json<RejectRequest>>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let reason = payload
        .and_then(|p| p.into_inner().reason)
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REASON.to_string());

    let conn = db::open(&cfg)?;
    let app = db::applications::get(&conn, id)?.ok_or(ApiError::NotFound)?;
    if !app.status.can_transition_to(ApplicationStatus::Rejected) {
        return Err(ApiError::Validation(
            "اس درخواست کا فیصلہ پہلے ہی ہو چکا ہے".to_string(),
        ));
    }
    db::applications::update_status(&conn, id, ApplicationStatus::Rejected)?;
    drop(conn);
    info!("application {} rejected", app.application_number);

    let (subject, body) = templates::application_rejected(&app, &reason, &cfg);
    if let Err(e) = mailer.send(&app.email, &subject, &body).await {
        warn!("rejection notice failed: {e}");
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "درخواست مسترد کر دی گئی"
    })))
}

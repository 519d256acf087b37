use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use crate::mail::{templates, Mailer};
use actix_web::{web, HttpResponse};
use common::model::application::ApplicationStatus;
use log::{info, warn};
use serde_json::json;

pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
    mailer: web::Data<Mailer>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let conn = db::open(&cfg)?;
    let app = db::applications::get(&conn, id)?.ok_or(ApiError::NotFound)?;
    if !app.status.can_transition_to(ApplicationStatus::Approved) {
        return Err(ApiError::Validation(
            "اس درخواست کا فیصلہ پہلے ہی ہو چکا ہے".to_string(),
        ));
    }
    db::applications::update_status(&conn, id, ApplicationStatus::Approved)?;
    drop(conn);
    info!("application {} approved", app.application_number);

    let (subject, body) = templates::application_approved(&app, &cfg);
    if let Err(e) = mailer.send(&app.email, &subject, &body).await {
        warn!("approval notice failed: {e}");
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "درخواست منظور کر دی گئی"
    })))
}

use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use serde_json::json;

pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    if !db::applications::delete(&conn, path.into_inner())? {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "درخواست ڈیلیٹ کر دی گئی"
    })))
}

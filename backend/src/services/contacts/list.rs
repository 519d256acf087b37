use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::contact::ContactStatus;
use common::requests::ListQuery;
use serde_json::json;

pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).max(1);
    let status = match query.status.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<ContactStatus>()
                .map_err(|_| ApiError::Validation("غلط اسٹیٹس فلٹر".to_string()))?,
        ),
    };

    let conn = db::open(&cfg)?;
    let (rows, total) = db::contacts::list(&conn, status, page, per_page)?;
    let pages = (total + i64::from(per_page) - 1) / i64::from(per_page);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "contacts": rows,
        "total": total,
        "pages": pages,
        "current_page": page,
        "per_page": per_page
    })))
}

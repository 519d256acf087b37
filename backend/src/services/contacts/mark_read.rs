use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::contact::ContactStatus;
use serde_json::json;

pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let conn = db::open(&cfg)?;
    let contact = db::contacts::get(&conn, id)?.ok_or(ApiError::NotFound)?;
    match contact.status {
        ContactStatus::New => {
            db::contacts::update_status(&conn, id, ContactStatus::Read)?;
        }
        // Already read: nothing to do, still a success.
        ContactStatus::Read => {}
        ContactStatus::Replied => {
            return Err(ApiError::Validation(
                "پیغام کا جواب پہلے ہی دیا جا چکا ہے".to_string(),
            ));
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "پیغام پڑھا ہوا نشان زد کر دیا گیا"
    })))
}

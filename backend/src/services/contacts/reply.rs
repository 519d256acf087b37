use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use crate::mail::{templates, Mailer};
use actix_web::{web, HttpResponse};
use common::model::contact::ContactStatus;
use common::requests::ReplyRequest;
use log::info;
use serde_json::json;

/// Sends an admin reply to the message's author. Unlike every other mail in
/// the system this one gates the outcome: the contact only becomes
/// `replied` once the relay has accepted the message.
pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
    mailer: web::Data<Mailer>,
    path: web::Path<i64>,
    payload: web::Json<ReplyRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let reply_message = payload.into_inner().reply_message;
    if reply_message.trim().is_empty() {
        return Err(ApiError::Validation("جواب کا پیغام لازمی ہے".to_string()));
    }

    let conn = db::open(&cfg)?;
    let contact = db::contacts::get(&conn, id)?.ok_or(ApiError::NotFound)?;
    // No open connection while the mail is on the wire.
    drop(conn);

    let (subject, body) = templates::contact_reply(&contact, reply_message.trim(), &cfg);
    mailer
        .send(&contact.email, &subject, &body)
        .await
        .map_err(|e| ApiError::MailDelivery(e.to_string()))?;
    info!("reply sent to contact {} <{}>", contact.id, contact.email);

    if contact.status.can_transition_to(ContactStatus::Replied) {
        let conn = db::open(&cfg)?;
        db::contacts::update_status(&conn, id, ContactStatus::Replied)?;
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "جواب کامیابی سے بھیج دیا گیا"
    })))
}

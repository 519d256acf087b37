use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use crate::mail::{templates, Mailer};
use crate::validation;
use actix_web::{web, HttpResponse};
use common::requests::ContactForm;
use log::{info, warn};
use serde_json::json;

pub(crate) async fn process(
    cfg: web::Data<AppConfig>,
    mailer: web::Data<Mailer>,
    payload: web::Json<ContactForm>,
) -> Result<HttpResponse, ApiError> {
    let form = payload.into_inner();

    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("subject", &form.subject),
        ("message", &form.message),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("فیلڈ {field} لازمی ہے")));
        }
    }
    if !validation::validate_email(form.email.trim()) {
        return Err(ApiError::Validation(
            "براہ کرم صحیح ای میل ایڈریس درج کریں".to_string(),
        ));
    }

    let conn = db::open(&cfg)?;
    let id = db::contacts::insert(
        &conn,
        form.name.trim(),
        &form.email.trim().to_lowercase(),
        form.subject.trim(),
        form.message.trim(),
    )?;
    info!(
        "contact form submitted by {} <{}>: {}",
        form.name.trim(),
        form.email.trim(),
        form.subject.trim()
    );

    // Notices are off by default; the submission never depends on them.
    if cfg.contact_notifications {
        let contact = db::contacts::get(&conn, id)?;
        drop(conn);
        if let Some(contact) = contact {
            let (subject, body) = templates::contact_received_admin(&contact);
            if let Err(e) = mailer.send(&cfg.admin_email, &subject, &body).await {
                warn!("contact admin notice failed: {e}");
            }
            let (subject, body) = templates::contact_received_user(&contact, &cfg);
            if let Err(e) = mailer.send(&contact.email, &subject, &body).await {
                warn!("contact confirmation failed: {e}");
            }
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "آپ کا پیغام کامیابی سے بھیج دیا گیا",
        "submission_id": id
    })))
}

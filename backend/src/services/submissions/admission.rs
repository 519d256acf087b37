use crate::config::AppConfig;
use crate::db;
use crate::db::applications::NewApplication;
use crate::error::ApiError;
use crate::mail::{templates, Mailer};
use crate::validation;
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use common::requests::AdmissionForm;
use log::{info, warn};
use serde_json::json;

pub(crate) async fn process(
    cfg: web::Data<AppConfig>,
    mailer: web::Data<Mailer>,
    payload: web::Json<AdmissionForm>,
) -> Result<HttpResponse, ApiError> {
    let form = payload.into_inner();
    let new_app = validate(&form)?;

    let mut conn = db::open(&cfg)?;
    let app = db::applications::insert(&mut conn, &new_app)?
        .ok_or(ApiError::DuplicateApplication)?;
    drop(conn);
    info!(
        "admission application {} stored for {} {}",
        app.application_number, app.first_name, app.last_name
    );

    // Best effort on both notices; the stored application stands either way.
    let (subject, body) = templates::admission_received_admin(&app);
    if let Err(e) = mailer.send(&cfg.admin_email, &subject, &body).await {
        warn!("admission admin notice failed: {e}");
    }
    let (subject, body) = templates::admission_received_applicant(&app, &cfg);
    if let Err(e) = mailer.send(&app.email, &subject, &body).await {
        warn!("admission confirmation failed: {e}");
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "آپ کی داخلہ درخواست کامیابی سے جمع ہوئی",
        "application_number": app.application_number,
        "application_id": app.id
    })))
}

/// Field presence and format checks, in the order the form shows them.
fn validate(form: &AdmissionForm) -> Result<NewApplication, ApiError> {
    for (field, value) in [
        ("firstName", &form.first_name),
        ("lastName", &form.last_name),
        ("fatherName", &form.father_name),
        ("cnic", &form.cnic),
        ("email", &form.email),
        ("phone", &form.phone),
        ("dateOfBirth", &form.date_of_birth),
        ("gender", &form.gender),
        ("address", &form.address),
        ("education", &form.education),
        ("course", &form.course),
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
    if !validation::validate_cnic(form.cnic.trim()) {
        return Err(ApiError::Validation(
            "براہ کرم CNIC صحیح فارمیٹ میں درج کریں (12345-1234567-1)".to_string(),
        ));
    }
    if !validation::validate_phone(form.phone.trim()) {
        return Err(ApiError::Validation(
            "براہ کرم فون نمبر صحیح فارمیٹ میں درج کریں (+923001234567)".to_string(),
        ));
    }

    let date_of_birth = NaiveDate::parse_from_str(form.date_of_birth.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("براہ کرم صحیح تاریخ پیدائش درج کریں".to_string()))?;

    Ok(NewApplication {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        father_name: form.father_name.trim().to_string(),
        cnic: form.cnic.trim().to_string(),
        email: form.email.trim().to_lowercase(),
        phone: form.phone.trim().to_string(),
        date_of_birth,
        gender: form.gender.trim().to_string(),
        address: form.address.trim().to_string(),
        education: form.education.trim().to_string(),
        course: form.course.trim().to_string(),
    })
}

use crate::auth::guard::AdminSession;
use crate::config::AppConfig;
use crate::db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::application::ApplicationStatus;
use common::model::contact::ContactStatus;
use serde_json::json;

pub(crate) async fn process(
    _admin: AdminSession,
    cfg: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;

    let total_applications = db::applications::count(&conn, None)?;
    let pending = db::applications::count(&conn, Some(ApplicationStatus::Pending))?;
    let approved = db::applications::count(&conn, Some(ApplicationStatus::Approved))?;
    let rejected = db::applications::count(&conn, Some(ApplicationStatus::Rejected))?;
    let total_contacts = db::contacts::count(&conn, None)?;
    let new_contacts = db::contacts::count(&conn, Some(ContactStatus::New))?;
    let course_distribution: Vec<_> = db::applications::course_distribution(&conn)?
        .into_iter()
        .map(|(course, count)| json!({"course": course, "count": count}))
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "stats": {
            "total_applications": total_applications,
            "pending_applications": pending,
            "approved_applications": approved,
            "rejected_applications": rejected,
            "total_contacts": total_contacts,
            "new_contacts": new_contacts,
            "course_distribution": course_distribution
        }
    })))
}

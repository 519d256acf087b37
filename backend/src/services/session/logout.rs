use actix_session::Session;
use actix_web::HttpResponse;
use serde_json::json;

pub(crate) async fn process(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "کامیابی سے لاگ آؤٹ ہو گئے"
    }))
}

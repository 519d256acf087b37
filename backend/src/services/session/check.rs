use crate::auth::guard;
use actix_session::Session;
use actix_web::HttpResponse;
use serde_json::json;

/// Reports the authentication state without refreshing the activity clock;
/// only real dashboard requests count as activity.
pub(crate) async fn process(session: Session) -> HttpResponse {
    let logged_in = session
        .get::<bool>(guard::LOGGED_IN_KEY)
        .ok()
        .flatten()
        .unwrap_or(false);

    if logged_in {
        let username = session.get::<String>(guard::USERNAME_KEY).ok().flatten();
        HttpResponse::Ok().json(json!({
            "success": true,
            "authenticated": true,
            "username": username
        }))
    } else {
        HttpResponse::Ok().json(json!({
            "success": true,
            "authenticated": false
        }))
    }
}

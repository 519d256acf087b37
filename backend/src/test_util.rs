//! Shared fixtures for the service-level tests: a throwaway database, the
//! app data the handlers expect, and a login helper for the guarded routes.

use crate::config::AppConfig;
use crate::db;
use crate::mail::Mailer;
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};
use rusqlite::Connection;
use serde_json::json;

pub struct TestCtx {
    _dir: tempfile::TempDir,
    pub cfg: web::Data<AppConfig>,
    pub mailer: web::Data<Mailer>,
}

impl TestCtx {
    pub fn conn(&self) -> Connection {
        db::open(&self.cfg).unwrap()
    }
}

/// Fresh database in a temp directory, default admin credentials, mail relay
/// left unconfigured so every send fails fast without touching the network.
pub fn ctx() -> TestCtx {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = AppConfig::load();
    cfg.database_path = dir.path().join("test.db").to_string_lossy().into_owned();
    cfg.admin_username = "admin".into();
    cfg.admin_password = "admin@123".into();
    cfg.contact_notifications = false;
    cfg.mail.server.clear();
    cfg.mail.username.clear();
    cfg.mail.password.clear();
    db::init_db(&cfg).unwrap();

    let mailer = Mailer::new(cfg.mail.clone());
    TestCtx {
        _dir: dir,
        cfg: web::Data::new(cfg),
        mailer: web::Data::new(mailer),
    }
}

/// Logs in through the session service and returns the session cookie. The
/// app under test must include `services::session::configure_routes()`.
pub async fn login<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({"username": "admin", "password": "admin@123"}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "test login failed");
    resp.response()
        .cookies()
        .find(|c| c.name() == crate::auth::SESSION_COOKIE_NAME)
        .expect("login sets the session cookie")
        .into_owned()
}

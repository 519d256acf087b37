mod auth;
mod config;
mod db;
mod error;
mod mail;
mod services;
#[cfg(test)]
mod test_util;
mod validation;

use crate::auth::guard;
use crate::config::AppConfig;
use actix_files::Files;
use actix_session::SessionExt;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::Utc;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use serde_json::json;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Serves the prebuilt site pages embedded at compile time. The admin
/// dashboard page carries the same session gate as the admin API, answering
/// with a redirect instead of JSON.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    if file_path == "admin_dashboard.html" {
        let timeout_secs = req
            .app_data::<web::Data<AppConfig>>()
            .map(|cfg| cfg.session_timeout_secs)
            .unwrap_or(1800);
        if guard::authorize(&req.get_session(), timeout_secs).is_err() {
            return HttpResponse::Found()
                .insert_header((header::LOCATION, "/admin_login.html"))
                .finish();
        }
    }

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "صفحہ موجود نہیں"
        })),
    }
}

/// API directory document, handy for smoke checks.
async fn api_home(cfg: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": format!("{} Backend API", cfg.university_name),
        "university": cfg.university_name_urdu,
        "status": "active",
        "version": "1.0.0",
        "endpoints": {
            "contact": "/api/submit-contact",
            "admission": "/api/submit-admission",
            "applications": "/api/admin/applications",
            "contacts": "/api/admin/contacts",
            "stats": "/api/admin/stats",
            "login": "/api/admin/login",
            "logout": "/api/admin/logout"
        }
    }))
}

/// Liveness probe: healthy only when the database answers.
async fn health(cfg: web::Data<AppConfig>) -> HttpResponse {
    let probe = db::open(&cfg)
        .and_then(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)));
    match probe {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
            "university": cfg.university_name
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(json!({
            "status": "unhealthy",
            "error": e.to_string(),
            "timestamp": Utc::now().to_rfc3339()
        })),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cfg = AppConfig::load();
    db::init_db(&cfg).map_err(std::io::Error::other)?;
    info!("database ready at {}", cfg.database_path);

    let mailer = mail::Mailer::new(cfg.mail.clone());
    let bind_addr = (cfg.host.clone(), cfg.port);
    info!("Server running at http://{}:{}", bind_addr.0, bind_addr.1);

    let cfg = web::Data::new(cfg);
    let mailer = web::Data::new(mailer);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .app_data(cfg.clone())
            .app_data(mailer.clone())
            .wrap(Logger::default())
            .wrap(auth::session_middleware(&cfg))
            .route("/api", web::get().to(api_home))
            .route("/api/", web::get().to(api_home))
            .route("/health", web::get().to(health))
            // Scope order matters: the bare /api scope must come after the
            // more specific /api/admin/* scopes or it would shadow them.
            .service(services::applications::configure_routes())
            .service(services::contacts::configure_routes())
            .service(services::stats::configure_routes())
            .service(services::session::configure_routes())
            .service(services::submissions::configure_routes())
            .service(Files::new("/assets", cfg.assets_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind_addr)?
    .run()
    .await
}

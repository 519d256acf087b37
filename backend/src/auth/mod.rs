//! Admin session handling.
//!
//! The session lives in a server-signed cookie, so no server-side state is
//! shared between requests or worker processes. This module configures the
//! cookie middleware; the per-request gate lives in [`guard`].

pub mod guard;

use crate::config::AppConfig;
use actix_session::config::BrowserSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{Key, SameSite};

pub const SESSION_COOKIE_NAME: &str = "viu_admin_session";

/// Cookie middleware matching the dashboard's expectations: http-only,
/// SameSite=Lax, gone when the browser closes.
pub fn session_middleware(cfg: &AppConfig) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), signing_key(&cfg.secret_key))
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(BrowserSession::default())
        .build()
}

/// Derives the cookie signing key. Short secrets are repeat-padded to the
/// 32-byte minimum the derivation requires instead of panicking at startup.
fn signing_key(secret: &str) -> Key {
    let mut bytes = secret.as_bytes().to_vec();
    bytes.resize(bytes.len().max(32), b'0');
    Key::derive_from(&bytes)
}

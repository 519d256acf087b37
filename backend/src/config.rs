//! Process configuration, loaded once at startup from environment variables.
//!
//! Every handler receives the resulting [`AppConfig`] through `web::Data`;
//! nothing reads the environment after startup. Missing keys fall back to
//! development defaults and are logged, so a bare `cargo run` brings up a
//! working local server.

use log::warn;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Immutable application configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_path: String,
    /// Secret used to sign the admin session cookie.
    pub secret_key: String,
    pub admin_username: String,
    pub admin_password: String,
    /// Inactivity window after which an admin session is invalidated.
    pub session_timeout_secs: i64,
    /// Whether contact-form submissions trigger notification emails.
    pub contact_notifications: bool,
    /// On-disk directory served under `/assets`.
    pub assets_dir: String,
    pub admin_email: String,
    pub university_name: String,
    pub university_name_urdu: String,
    pub university_email: String,
    pub university_phone: String,
    pub mail: MailConfig,
}

/// Outbound SMTP relay settings.
#[derive(Clone)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    /// STARTTLS on a plaintext connection (the usual port 587 setup).
    pub use_tls: bool,
    /// Implicit TLS from the first byte (port 465 setup); wins over `use_tls`.
    pub use_ssl: bool,
    pub username: String,
    pub password: String,
    /// Upper bound on a single send, connection included.
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parse_or("PORT", 8000),
            database_path: var_or("DATABASE_PATH", "university_data.db"),
            secret_key: var_or(
                "SECRET_KEY",
                "dev-secret-key-change-in-production-123456789",
            ),
            admin_username: var_or("ADMIN_USERNAME", "admin"),
            admin_password: var_or("ADMIN_PASSWORD", "admin@123"),
            session_timeout_secs: parse_or("SESSION_TIMEOUT_SECS", 1800),
            contact_notifications: parse_bool(&var_or("CONTACT_NOTIFICATIONS", "false")),
            assets_dir: var_or("ASSETS_DIR", "assets"),
            admin_email: var_or("ADMIN_EMAIL", ""),
            university_name: var_or("UNIVERSITY_NAME", "Virtual Islamic University"),
            university_name_urdu: var_or("UNIVERSITY_NAME_URDU", "ورچوئل اسلامک یونیورسٹی"),
            university_email: var_or("UNIVERSITY_EMAIL", ""),
            university_phone: var_or("UNIVERSITY_PHONE", ""),
            mail: MailConfig {
                server: var_or("MAIL_SERVER", ""),
                port: parse_or("MAIL_PORT", 587),
                use_tls: parse_bool(&var_or("MAIL_USE_TLS", "true")),
                use_ssl: parse_bool(&var_or("MAIL_USE_SSL", "false")),
                username: var_or("MAIL_USERNAME", ""),
                password: var_or("MAIL_PASSWORD", ""),
                timeout_secs: parse_or("MAIL_TIMEOUT_SECS", 15),
            },
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("invalid {} value ({}), using default", key, e);
            default
        }),
        Err(_) => default,
    }
}

fn parse_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

//! # Admin Session Service
//!
//! Login, logout and the authentication probe used by the dashboard pages.
//! The session itself is a signed cookie (see `crate::auth`); these routes
//! only populate, report or clear it.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/admin/login`** — `login::process`: checks the submitted
//!     credentials against the configured admin account and, on success,
//!     stamps the session with the login and last-activity timestamps the
//!     guard relies on.
//! *   **`POST /api/admin/logout`** — `logout::process`: unconditionally
//!     clears the session.
//! *   **`GET /api/admin/check-auth`** — `check::process`: reports whether
//!     the current cookie belongs to a logged-in admin.

mod check;
mod login;
mod logout;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/logout", post().to(logout::process))
        .route("/check-auth", get().to(check::process))
}

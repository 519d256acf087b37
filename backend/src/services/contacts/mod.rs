//! # Contact Submission Administration
//!
//! Guarded dashboard endpoints over the `contact_submissions` table. The
//! review state only moves forward (`new` to `read` to `replied`), and the
//! `replied` transition is special: it happens only after the reply email
//! has actually been delivered.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/admin/contacts`** — `list::process`: newest-first
//!     paginated listing, optionally filtered by status.
//! *   **`POST /api/admin/contacts/{id}/mark-read`** — `mark_read::process`.
//! *   **`POST /api/admin/contacts/{id}/reply`** — `reply::process`: sends
//!     the reply email; a transport failure leaves the status untouched and
//!     surfaces as a server error.
//! *   **`DELETE /api/admin/contacts/{id}`** — `remove::process`.

mod list;
mod mark_read;
mod remove;
mod reply;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin/contacts";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{id}/mark-read", post().to(mark_read::process))
        .route("/{id}/reply", post().to(reply::process))
        .route("/{id}", delete().to(remove::process))
}

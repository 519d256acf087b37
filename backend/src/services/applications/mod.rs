//! # Admission Application Administration
//!
//! Guarded dashboard endpoints over the `admission_applications` table.
//! Every route requires a live admin session (the `AdminSession` extractor);
//! decisions are monotonic — a pending application can be approved or
//! rejected once, and both outcomes are final.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/admin/applications`** — `list::process`: newest-first
//!     paginated listing, optionally filtered by status.
//! *   **`POST /api/admin/applications/{id}/approve`** — `approve::process`:
//!     marks a pending application approved and emails the applicant.
//! *   **`POST /api/admin/applications/{id}/reject`** — `reject::process`:
//!     marks a pending application rejected, with an optional free-text
//!     reason carried into the notification email.
//! *   **`DELETE /api/admin/applications/{id}`** — `remove::process`:
//!     deletes the record.

mod approve;
mod list;
mod reject;
mod remove;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin/applications";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{id}/approve", post().to(approve::process))
        .route("/{id}/reject", post().to(reject::process))
        .route("/{id}", delete().to(remove::process))
}

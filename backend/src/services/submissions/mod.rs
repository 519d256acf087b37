//! # Public Submission Services
//!
//! The two unauthenticated write endpoints of the site: the contact form on
//! the landing page and the admission form. Both follow the same shape:
//! parse the JSON body, check required fields, run the format validations,
//! persist, then send the notification emails without letting a mail failure
//! break the submission.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/submit-contact`**:
//!     - **Handler**: `contact::process`
//!     - **Description**: Stores a contact-form message with status `new` and
//!       returns the generated `submission_id`. Notification emails are only
//!       attempted when `CONTACT_NOTIFICATIONS` is enabled.
//!
//! *   **`POST /api/submit-admission`**:
//!     - **Handler**: `admission::process`
//!     - **Description**: Validates the eleven admission fields (including
//!       CNIC, phone and date-of-birth formats), refuses duplicates by CNIC
//!       or email, stores the application and assigns its application
//!       number, then emails the admissions inbox and the applicant.

mod admission;
mod contact;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/submit-contact", post().to(contact::process))
        .route("/submit-admission", post().to(admission::process))
}

use serde::Deserialize;

/// Payload of the public contact form.
#[derive(Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Payload of the public admission form. Field names follow the camelCase
/// keys sent by the admission page.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionForm {
    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    pub cnic: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`; parsed into a date by the handler.
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub education: String,
    pub course: String,
}

/// Admin login credentials.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Optional free-text reason attached to a rejection.
#[derive(Deserialize, Default)]
pub struct RejectRequest {
    pub reason: Option<String>,
}

/// Reply text sent to a contact submission's author.
#[derive(Deserialize)]
pub struct ReplyRequest {
    pub reply_message: String,
}

/// Common query parameters of the paginated admin listings.
#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
}

//! Message texts for the notification emails. Plain string interpolation,
//! one function per workflow event, each returning `(subject, body)`.

use crate::config::AppConfig;
use common::model::application::{course_display_name, AdmissionApplication};
use common::model::contact::ContactSubmission;

/// New-application notice for the admissions inbox.
pub fn admission_received_admin(app: &AdmissionApplication) -> (String, String) {
    let subject = format!("نئی داخلہ درخواست - {} {}", app.first_name, app.last_name);
    let body = format!(
        "\nنئی داخلہ درخواست موصول ہوئی:\n\n\
         Application Number: {}\n\n\
         طالب علم کی تفصیلات:\n\
         نام: {} {}\n\
         والد کا نام: {}\n\
         CNIC: {}\n\
         ای میل: {}\n\
         فون: {}\n\
         تاریخ پیدائش: {}\n\
         جنس: {}\n\
         پتہ: {}\n\
         تعلیمی قابلیت: {}\n\
         منتخب کردہ کورس: {}\n\n\
         درخواست کی تاریخ: {}\n\n\
         Virtual Islamic University Admissions\n",
        app.application_number,
        app.first_name,
        app.last_name,
        app.father_name,
        app.cnic,
        app.email,
        app.phone,
        app.date_of_birth,
        app.gender,
        app.address,
        app.education,
        app.course,
        app.application_date.format("%Y-%m-%d %H:%M:%S"),
    );
    (subject, body)
}

/// Confirmation for the applicant, carrying the application number.
pub fn admission_received_applicant(
    app: &AdmissionApplication,
    cfg: &AppConfig,
) -> (String, String) {
    let subject = format!("داخلہ درخواست موصول ہوئی - {}", cfg.university_name);
    let body = format!(
        "\nالسلام علیکم {} {},\n\n\
         آپ کی داخلہ درخواست کامیابی سے موصول ہوئی ہے۔\n\n\
         Application Number: {}\n\
         منتخب کردہ کورس: {}\n\n\
         ہم جلد ہی آپ کی درخواست کا جائزہ لے کر آپ سے رابطہ کریں گے۔\n\
         اپنا Application Number محفوظ رکھیں۔\n\n\
         شکریہ!\n\
         {} Admissions Team\n{}\n{}\n",
        app.first_name,
        app.last_name,
        app.application_number,
        course_display_name(&app.course),
        cfg.university_name,
        cfg.university_email,
        cfg.university_phone,
    );
    (subject, body)
}

pub fn application_approved(app: &AdmissionApplication, cfg: &AppConfig) -> (String, String) {
    let subject = format!("داخلہ منظور! - {}", cfg.university_name);
    let body = format!(
        "\nالسلام علیکم {} {},\n\n\
         مبارک ہو! آپ کی داخلہ درخواست منظور ہو گئی ہے۔\n\n\
         Application Number: {}\n\
         منتخب کردہ کورس: {}\n\n\
         ہم جلد ہی آپ کو کورس کی تفصیلات اور شروعات کی تاریخ کے بارے میں مطلع کریں گے۔\n\n\
         خوش آمدید {} میں!\n\n\
         {} Admissions Team\n{}\n{}\n",
        app.first_name,
        app.last_name,
        app.application_number,
        course_display_name(&app.course),
        cfg.university_name,
        cfg.university_name,
        cfg.university_email,
        cfg.university_phone,
    );
    (subject, body)
}

pub fn application_rejected(
    app: &AdmissionApplication,
    reason: &str,
    cfg: &AppConfig,
) -> (String, String) {
    let subject = format!("داخلہ درخواست - {}", cfg.university_name);
    let body = format!(
        "\nالسلام علیکم {} {},\n\n\
         ہمیں افسوس ہے کہ اس وقت آپ کی داخلہ درخواست منظور نہیں کی جا سکی۔\n\n\
         Application Number: {}\n\
         وجہ: {}\n\n\
         آپ مستقبل میں دوبارہ درخواست دے سکتے ہیں۔\n\n\
         شکریہ!\n\
         {} Admissions Team\n{}\n{}\n",
        app.first_name,
        app.last_name,
        app.application_number,
        reason,
        cfg.university_name,
        cfg.university_email,
        cfg.university_phone,
    );
    (subject, body)
}

/// Admin reply delivered to the contact submission's author.
pub fn contact_reply(
    contact: &ContactSubmission,
    reply_message: &str,
    cfg: &AppConfig,
) -> (String, String) {
    let subject = format!("جواب: {} - {}", contact.subject, cfg.university_name);
    let body = format!(
        "\nالسلام علیکم {},\n\n\
         آپ کے پیغام کا جواب:\n\n\
         اصل پیغام: \"{}\"\n\
         آپ کا پیغام: \"{}\"\n\n\
         --- ہمارا جواب ---\n\
         {}\n\
         --- جواب کا اختتام ---\n\n\
         اگر آپ کے کوئی اور سوالات ہیں تو براہ کرم ہم سے رابطہ کریں۔\n\n\
         شکریہ!\n\
         {} Team\n{}\n{}\n",
        contact.name,
        contact.subject,
        contact.message,
        reply_message,
        cfg.university_name,
        cfg.university_email,
        cfg.university_phone,
    );
    (subject, body)
}

/// New-message notice for the admin inbox (sent only when contact
/// notifications are enabled).
pub fn contact_received_admin(contact: &ContactSubmission) -> (String, String) {
    let subject = format!("New Contact Form Submission - {}", contact.subject);
    let body = format!(
        "\nنیا رابطہ پیغام موصول ہوا:\n\n\
         نام: {}\n\
         ای میل: {}\n\
         موضوع: {}\n\
         پیغام: {}\n\n\
         وقت: {}\n\
         Submission ID: {}\n",
        contact.name,
        contact.email,
        contact.subject,
        contact.message,
        contact.submission_date.format("%Y-%m-%d %H:%M:%S"),
        contact.id,
    );
    (subject, body)
}

/// Receipt confirmation for the message author (sent only when contact
/// notifications are enabled).
pub fn contact_received_user(contact: &ContactSubmission, cfg: &AppConfig) -> (String, String) {
    let subject = format!("آپ کا پیغام موصول ہوا - {}", cfg.university_name);
    let body = format!(
        "\nالسلام علیکم {},\n\n\
         آپ کا پیغام کامیابی سے موصول ہوا ہے۔\n\
         موضوع: {}\n\n\
         ہم جلد ہی آپ سے رابطہ کریں گے۔\n\n\
         شکریہ!\n\
         {} Team\n{}\n{}\n",
        contact.name,
        contact.subject,
        cfg.university_name,
        cfg.university_email,
        cfg.university_phone,
    );
    (subject, body)
}

//! # Dashboard Statistics Service
//!
//! One guarded read endpoint aggregating both tables for the dashboard's
//! header tiles: application totals by status, contact totals, and the
//! per-course distribution.

mod summary;

use actix_web::web::{get, scope};
use actix_web::Scope;

// Owns its full path so it never shadows the other /api/admin scopes.
const API_PATH: &str = "/api/admin/stats";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(summary::process))
}

#[cfg(test)]
mod tests {
    use crate::db;
    use crate::db::applications::NewApplication;
    use crate::test_util;
    use actix_web::{test, App};
    use chrono::NaiveDate;
    use common::model::application::ApplicationStatus;

    #[actix_web::test]
    async fn stats_count_both_tables() {
        let ctx = test_util::ctx();
        {
            let mut conn = ctx.conn();
            for (i, course) in ["quran", "quran", "arabic"].iter().enumerate() {
                let app = NewApplication {
                    first_name: "A".into(),
                    last_name: "B".into(),
                    father_name: "C".into(),
                    cnic: format!("{:05}-1234567-1", i),
                    email: format!("a{i}@example.com"),
                    phone: "+923001234567".into(),
                    date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                    gender: "male".into(),
                    address: "Lahore".into(),
                    education: "matric".into(),
                    course: (*course).into(),
                };
                let stored = db::applications::insert(&mut conn, &app).unwrap().unwrap();
                if i == 0 {
                    db::applications::update_status(&conn, stored.id, ApplicationStatus::Approved)
                        .unwrap();
                }
            }
            db::contacts::insert(&conn, "V", "v@example.com", "s", "m").unwrap();
        }

        let app = test::init_service(
            App::new()
                .app_data(ctx.cfg.clone())
                .wrap(crate::auth::session_middleware(&ctx.cfg))
                .service(super::configure_routes())
                .service(crate::services::session::configure_routes()),
        )
        .await;
        let cookie = test_util::login(&app).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/stats")
            .cookie(cookie)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let stats = &body["stats"];
        assert_eq!(stats["total_applications"], 3);
        assert_eq!(stats["pending_applications"], 2);
        assert_eq!(stats["approved_applications"], 1);
        assert_eq!(stats["rejected_applications"], 0);
        assert_eq!(stats["total_contacts"], 1);
        assert_eq!(stats["new_contacts"], 1);

        let courses = stats["course_distribution"].as_array().unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1]["course"], "quran");
        assert_eq!(courses[1]["count"], 2);
    }
}

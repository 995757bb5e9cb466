use std::pin::Pin;

use crate::seed::Seeder;
use db::AttendanceError;
use db::models::{course::Model as Course, lecturer::Model as Lecturer};
use sea_orm::DatabaseConnection;

pub struct CourseSeeder;

/// (code, title, staff_id of the lecturer, if any)
const COURSES: &[(&str, &str, Option<&str>)] = &[
    ("CS301", "Algorithms", Some("STF/001")),
    ("CS305", "Operating Systems", Some("STF/002")),
    ("CS310", "Databases", Some("STF/001")),
    ("MTH201", "Linear Algebra", None),
];

impl Seeder for CourseSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), AttendanceError>> + Send + 'a>> {
        Box::pin(async move {
            for (code, title, staff_id) in COURSES {
                if Course::get_by_code(db, code).await?.is_some() {
                    continue;
                }
                let lecturer_id = match staff_id {
                    Some(staff_id) => Lecturer::get_by_staff_id(db, staff_id)
                        .await?
                        .map(|l| l.id),
                    None => None,
                };
                Course::create(db, code, title, lecturer_id).await?;
            }
            Ok(())
        })
    }
}

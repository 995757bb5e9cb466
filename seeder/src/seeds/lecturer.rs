use std::pin::Pin;

use crate::seed::Seeder;
use db::AttendanceError;
use db::models::lecturer::Model as Lecturer;
use sea_orm::DatabaseConnection;

pub struct LecturerSeeder;

const LECTURERS: &[(&str, i64, &str, &str)] = &[
    ("STF/001", 101, "Alan Turing", "Computer Science"),
    ("STF/002", 102, "Barbara Liskov", "Computer Science"),
    ("STF/003", 103, "Emmy Noether", "Mathematics"),
];

impl Seeder for LecturerSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), AttendanceError>> + Send + 'a>> {
        Box::pin(async move {
            for (staff_id, user_id, full_name, department) in LECTURERS {
                if Lecturer::get_by_staff_id(db, staff_id).await?.is_none() {
                    Lecturer::create(db, staff_id, *user_id, full_name, department).await?;
                }
            }
            Ok(())
        })
    }
}

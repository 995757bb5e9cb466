use std::pin::Pin;

use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::AttendanceError;
use db::models::attendance_record::Model as AttendanceRecord;
use db::models::{course::Model as Course, student::Model as Student};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;

pub struct AttendanceSeeder;

impl Seeder for AttendanceSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), AttendanceError>> + Send + 'a>> {
        Box::pin(async move {
            let mut rng = StdRng::seed_from_u64(2026);
            let students = Student::all_by_name(db).await?;
            let courses = Course::all_with_lecturer(db).await?;

            // A week of lectures per course, with most students scanning in.
            for days_ago in 1..=5i64 {
                let lecture_start = Utc::now() - Duration::days(days_ago);
                for (course, _) in &courses {
                    for student in &students {
                        if !rng.gen_bool(0.8) {
                            continue;
                        }
                        let scanned_at = lecture_start + Duration::minutes(rng.gen_range(0..45));
                        match AttendanceRecord::record_scan(
                            db,
                            &student.qr_payload(),
                            &course.course_code,
                            scanned_at,
                        )
                        .await
                        {
                            Ok(_) => {}
                            // Re-running the seeder lands in the same window.
                            Err(AttendanceError::DuplicateScan { .. }) => {}
                            Err(e) => return Err(e),
                        }
                    }
                }
            }
            Ok(())
        })
    }
}

use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    attendance::AttendanceSeeder, course::CourseSeeder, lecturer::LecturerSeeder,
    student::StudentSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    for (seeder, name) in [
        (
            Box::new(LecturerSeeder) as Box<dyn Seeder + Send + Sync>,
            "Lecturer",
        ),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(AttendanceSeeder), "Attendance"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}

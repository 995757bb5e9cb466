use std::pin::Pin;

use crate::seed::Seeder;
use db::AttendanceError;
use db::models::student::Model as Student;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::DatabaseConnection;

pub struct StudentSeeder;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Amara", "Chidi", "Dayo", "Efe", "Folake", "Grace", "Ibrahim", "Kemi", "Lanre",
    "Musa", "Ngozi", "Obi", "Sade", "Tunde", "Yusuf", "Zainab",
];

const LAST_NAMES: &[&str] = &[
    "Adeyemi", "Balogun", "Chukwu", "Danjuma", "Eze", "Ibrahim", "Lawal", "Mohammed", "Nwosu",
    "Okafor", "Olawale", "Suleiman", "Umar",
];

const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Electrical Engineering",
    "Mathematics",
    "Physics",
];

impl Seeder for StudentSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), AttendanceError>> + Send + 'a>> {
        Box::pin(async move {
            // Seeded RNG so repeated runs produce the same roster, matching
            // the upsert semantics of the administrative import.
            let mut rng = StdRng::seed_from_u64(2026);

            for i in 1..=40u32 {
                let first = FIRST_NAMES.choose(&mut rng).unwrap();
                let last = LAST_NAMES.choose(&mut rng).unwrap();
                let full_name = format!("{first} {last}");
                let gender = if rng.gen_bool(0.5) { "Female" } else { "Male" };
                let department = DEPARTMENTS.choose(&mut rng).unwrap();
                let matric_no = format!("CS/2024/{i:03}");

                Student::upsert(db, &matric_no, &full_name, gender, department).await?;
            }
            Ok(())
        })
    }
}

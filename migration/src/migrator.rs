use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601150001_create_students::Migration),
            Box::new(migrations::m202601150002_create_lecturers::Migration),
            Box::new(migrations::m202601150003_create_courses::Migration),
            Box::new(migrations::m202601150004_create_attendance_records::Migration),
        ]
    }
}

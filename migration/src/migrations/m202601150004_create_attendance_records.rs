use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150004_create_attendance_records"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("attendance_records"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("student_matric_no"))
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("course_code"))
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("timestamp"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_att_rec_student")
                            .from(
                                Alias::new("attendance_records"),
                                Alias::new("student_matric_no"),
                            )
                            .to(Alias::new("students"), Alias::new("matric_no"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_att_rec_course")
                            .from(Alias::new("attendance_records"), Alias::new("course_code"))
                            .to(Alias::new("courses"), Alias::new("course_code"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the duplicate-window probe and per-course grouping queries.
        manager
            .create_index(
                Index::create()
                    .name("idx_att_rec_student_course_ts")
                    .table(Alias::new("attendance_records"))
                    .col(Alias::new("student_matric_no"))
                    .col(Alias::new("course_code"))
                    .col(Alias::new("timestamp"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("attendance_records"))
                    .to_owned(),
            )
            .await
    }
}

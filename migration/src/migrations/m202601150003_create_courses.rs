use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150003_create_courses"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("courses"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("course_code"))
                            .string_len(10)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("course_title"))
                            .string()
                            .not_null(),
                    )
                    // A course may run without an assigned lecturer; removing
                    // the lecturer clears the reference rather than cascading.
                    .col(ColumnDef::new(Alias::new("lecturer_id")).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_lecturer")
                            .from(Alias::new("courses"), Alias::new("lecturer_id"))
                            .to(Alias::new("lecturers"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("courses")).to_owned())
            .await
    }
}

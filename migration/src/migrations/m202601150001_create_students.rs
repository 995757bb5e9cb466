use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150001_create_students"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("students"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("matric_no"))
                            .string_len(20)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("full_name")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("gender"))
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("department")).string().not_null())
                    .col(ColumnDef::new(Alias::new("qr_code_path")).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("students")).to_owned())
            .await
    }
}

//! Create subfleets table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subfleets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subfleets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subfleets::TypeCode).string_len(20).not_null())
                    .col(ColumnDef::new(Subfleets::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subfleets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subfleets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subfleets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Subfleets {
    Table,
    Id,
    TypeCode,
    Name,
    CreatedAt,
    UpdatedAt,
}

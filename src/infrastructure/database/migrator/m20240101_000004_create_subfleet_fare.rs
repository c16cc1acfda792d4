//! Create subfleet_fare association table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_fares::Fares;
use super::m20240101_000002_create_subfleets::Subfleets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubfleetFare::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubfleetFare::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SubfleetFare::SubfleetId).integer().not_null())
                    .col(ColumnDef::new(SubfleetFare::FareId).integer().not_null())
                    .col(ColumnDef::new(SubfleetFare::Price).string())
                    .col(ColumnDef::new(SubfleetFare::Cost).string())
                    .col(ColumnDef::new(SubfleetFare::Capacity).string())
                    .col(
                        ColumnDef::new(SubfleetFare::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubfleetFare::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subfleet_fare_subfleet")
                            .from(SubfleetFare::Table, SubfleetFare::SubfleetId)
                            .to(Subfleets::Table, Subfleets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subfleet_fare_fare")
                            .from(SubfleetFare::Table, SubfleetFare::FareId)
                            .to(Fares::Table, Fares::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One association per (subfleet, fare); upserts conflict on this index
        manager
            .create_index(
                Index::create()
                    .name("idx_subfleet_fare_owner_fare")
                    .table(SubfleetFare::Table)
                    .col(SubfleetFare::SubfleetId)
                    .col(SubfleetFare::FareId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubfleetFare::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SubfleetFare {
    Table,
    Id,
    SubfleetId,
    FareId,
    Price,
    Cost,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

//! Create flights table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_subfleets::Subfleets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Flights::AirlineCode).string_len(5).not_null())
                    .col(ColumnDef::new(Flights::FlightNumber).string_len(10).not_null())
                    .col(ColumnDef::new(Flights::DptAirport).string_len(5).not_null())
                    .col(ColumnDef::new(Flights::ArrAirport).string_len(5).not_null())
                    .col(ColumnDef::new(Flights::SubfleetId).integer())
                    .col(
                        ColumnDef::new(Flights::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Flights::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_subfleet")
                            .from(Flights::Table, Flights::SubfleetId)
                            .to(Subfleets::Table, Subfleets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Flights {
    Table,
    Id,
    AirlineCode,
    FlightNumber,
    DptAirport,
    ArrAirport,
    SubfleetId,
    CreatedAt,
    UpdatedAt,
}

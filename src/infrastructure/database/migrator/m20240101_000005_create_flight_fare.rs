//! Create flight_fare association table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_fares::Fares;
use super::m20240101_000003_create_flights::Flights;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightFare::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FlightFare::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FlightFare::FlightId).string_len(36).not_null())
                    .col(ColumnDef::new(FlightFare::FareId).integer().not_null())
                    .col(ColumnDef::new(FlightFare::Price).string())
                    .col(ColumnDef::new(FlightFare::Cost).string())
                    .col(ColumnDef::new(FlightFare::Capacity).string())
                    .col(
                        ColumnDef::new(FlightFare::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlightFare::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_fare_flight")
                            .from(FlightFare::Table, FlightFare::FlightId)
                            .to(Flights::Table, Flights::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_fare_fare")
                            .from(FlightFare::Table, FlightFare::FareId)
                            .to(Fares::Table, Fares::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_fare_owner_fare")
                    .table(FlightFare::Table)
                    .col(FlightFare::FlightId)
                    .col(FlightFare::FareId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightFare::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FlightFare {
    Table,
    Id,
    FlightId,
    FareId,
    Price,
    Cost,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

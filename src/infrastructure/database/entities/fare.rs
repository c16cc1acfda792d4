//! Fare entity

use sea_orm::entity::prelude::*;

/// Fare model - a reusable price/cost/capacity definition
///
/// Money columns are kept as decimal text so values survive SQLite
/// without passing through `f64`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fares")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique fare code (e.g., "Y", "J", "F")
    #[sea_orm(unique)]
    pub code: String,

    pub name: String,

    /// Ticket price, decimal text
    pub price: String,

    /// Operating cost, decimal text
    pub cost: String,

    /// Seat count
    pub capacity: i32,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    pub active: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_fare::Entity")]
    FlightFares,
    #[sea_orm(has_many = "super::subfleet_fare::Entity")]
    SubfleetFares,
}

impl Related<super::flight_fare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightFares.def()
    }
}

impl Related<super::subfleet_fare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubfleetFares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

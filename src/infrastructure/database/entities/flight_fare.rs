//! Flight ↔ Fare association

use sea_orm::entity::prelude::*;

/// Overrides are stored in text form: `NULL` (fare default), `"50"`
/// (absolute) or `"-20%"` (percentage).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_fare")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub flight_id: String,
    pub fare_id: i32,

    #[sea_orm(nullable)]
    pub price: Option<String>,
    #[sea_orm(nullable)]
    pub cost: Option<String>,
    #[sea_orm(nullable)]
    pub capacity: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::fare::Entity",
        from = "Column::FareId",
        to = "super::fare::Column::Id"
    )]
    Fare,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::fare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fare.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Subfleet ↔ Fare association

use sea_orm::entity::prelude::*;

/// Same layout as `flight_fare`, keyed by subfleet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subfleet_fare")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub subfleet_id: i32,
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
        belongs_to = "super::subfleet::Entity",
        from = "Column::SubfleetId",
        to = "super::subfleet::Column::Id"
    )]
    Subfleet,
    #[sea_orm(
        belongs_to = "super::fare::Entity",
        from = "Column::FareId",
        to = "super::fare::Column::Id"
    )]
    Fare,
}

impl Related<super::subfleet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subfleet.def()
    }
}

impl Related<super::fare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fare.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

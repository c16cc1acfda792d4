//! Subfleet entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subfleets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// ICAO aircraft type (e.g., "B777")
    pub type_code: String,

    pub name: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight::Entity")]
    Flights,
    #[sea_orm(has_many = "super::subfleet_fare::Entity")]
    SubfleetFares,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl Related<super::subfleet_fare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubfleetFares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

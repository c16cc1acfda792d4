//! Flight entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub airline_code: String,
    pub flight_number: String,
    pub dpt_airport: String,
    pub arr_airport: String,

    #[sea_orm(nullable)]
    pub subfleet_id: Option<i32>,

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
    #[sea_orm(has_many = "super::flight_fare::Entity")]
    FlightFares,
}

impl Related<super::subfleet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subfleet.def()
    }
}

impl Related<super::flight_fare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightFares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

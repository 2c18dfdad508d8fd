//! User location database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::UserLocation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub ip_address: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserLocation {
    fn from(model: Model) -> Self {
        UserLocation {
            id: model.id,
            user_id: model.user_id,
            ip_address: model.ip_address,
            country: model.country,
            state: model.state,
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at,
        }
    }
}

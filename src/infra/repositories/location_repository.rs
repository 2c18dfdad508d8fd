//! Append-only store of observed request locations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::user_location::{self, ActiveModel, Entity as LocationEntity};
use crate::domain::{NewUserLocation, UserLocation};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Location repository trait. There is no update or delete.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Append one observation
    async fn create(&self, location: NewUserLocation) -> AppResult<UserLocation>;

    /// All observations for a user, oldest first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<UserLocation>>;
}

/// Concrete implementation of LocationRepository backed by SeaORM
pub struct LocationStore {
    db: DatabaseConnection,
}

impl LocationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationRepository for LocationStore {
    async fn create(&self, location: NewUserLocation) -> AppResult<UserLocation> {
        let geo = location.geo;
        let active_model = ActiveModel {
            user_id: Set(location.user_id),
            ip_address: Set(Some(location.ip_address)),
            country: Set(geo.country),
            state: Set(geo.state),
            latitude: Set(geo.latitude),
            longitude: Set(geo.longitude),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(UserLocation::from(model))
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<UserLocation>> {
        let models = LocationEntity::find()
            .filter(user_location::Column::UserId.eq(user_id))
            .order_by_asc(user_location::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(UserLocation::from).collect())
    }
}

//! User repository implementation with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Rows are never physically removed; soft-deleted users stay
/// visible to every lookup.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Page through users ordered by id, optionally filtered by activity.
    /// Returns the page and the total number of matching rows.
    async fn list(
        &self,
        params: PaginationParams,
        is_active: Option<bool>,
    ) -> AppResult<(Vec<User>, u64)>;

    /// Insert a new user
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Apply the fields present in `changes`
    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Mark the user inactive
    async fn soft_delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> AppResult<user::Model> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("User")
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn list(
        &self,
        params: PaginationParams,
        is_active: Option<bool>,
    ) -> AppResult<(Vec<User>, u64)> {
        let mut query = UserEntity::find();
        if let Some(active) = is_active {
            query = query.filter(user::Column::IsActive.eq(active));
        }

        let total = query.clone().count(&self.db).await?;

        let models = query
            .order_by_asc(user::Column::Id)
            .offset(params.offset())
            .limit(params.limit())
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(User::from).collect(), total))
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let active_model = ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            phone_number: Set(input.phone_number),
            date_of_birth: Set(input.date_of_birth),
            is_active: Set(input.is_active),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(phone_number) = changes.phone_number {
            active.phone_number = Set(phone_number);
        }
        if let Some(date_of_birth) = changes.date_of_birth {
            active.date_of_birth = Set(date_of_birth);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        let model = active.update(&self.db).await?;
        Ok(User::from(model))
    }

    async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let mut active: ActiveModel = self.find_model(id).await?.into();
        active.is_active = Set(false);
        active.updated_at = Set(Some(Utc::now()));

        active.update(&self.db).await?;
        Ok(())
    }
}

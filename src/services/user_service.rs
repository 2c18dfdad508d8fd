//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::{Paginated, PaginationParams};

/// User service trait for dependency injection.
///
/// Soft-deleted users remain readable and updatable.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Page through users; `None` applies no activity filter
    async fn list_users(
        &self,
        params: PaginationParams,
        is_active: Option<bool>,
    ) -> AppResult<Paginated<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a new user with a unique email
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Apply a partial update
    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Soft delete user (sets is_active = false)
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(
        &self,
        params: PaginationParams,
        is_active: Option<bool>,
    ) -> AppResult<Paginated<User>> {
        let (users, total) = self.repo.list(params, is_active).await?;
        Ok(Paginated::new(users, params, total))
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        // Fast path; the unique index still rejects a concurrent duplicate
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let user = self.repo.create(input).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        self.get_user(id).await?;

        if let Some(email) = changes.email.as_deref() {
            if let Some(owner) = self.repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(AppError::conflict("Email"));
                }
            }
        }

        let user = self.repo.update(id, changes).await?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.soft_delete(id).await?;
        tracing::info!(user_id = id, "User deactivated");
        Ok(())
    }
}

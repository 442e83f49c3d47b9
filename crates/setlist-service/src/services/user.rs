//! User service
//!
//! Handles account creation and profile operations.

use setlist_core::entities::User;
use setlist_core::error::DomainError;
use setlist_core::traits::Store;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a user; email and username must be free
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let email = request.email.trim().to_lowercase();
        let username = request.username.trim().to_string();

        if self.ctx.user_repo().find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().find_by_username(&username).await?.is_some() {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let mut user = User::new(
            Uuid::new_v4(),
            email,
            username,
            request.first_name,
            request.last_name,
            request.role,
        );
        user.phone_number = request.phone_number;

        self.ctx.user_repo().create(&user).await?;
        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self.ctx.user_repo().get(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get user by email (case-insensitive)
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        Ok(UserResponse::from(&user))
    }

    /// Update profile fields
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.ctx.user_repo().get(user_id).await?;
        let mut changed = false;

        if request.first_name.is_some() || request.last_name.is_some() {
            let first = request.first_name.unwrap_or_else(|| user.first_name.clone());
            let last = request.last_name.unwrap_or_else(|| user.last_name.clone());
            user.set_names(first, last);
            changed = true;
        }

        if let Some(phone_number) = request.phone_number {
            user.set_phone_number(Some(phone_number));
            changed = true;
        }

        if let Some(bio) = request.bio {
            user.set_bio(Some(bio));
            changed = true;
        }

        if let Some(avatar) = request.avatar {
            user.set_avatar(Some(avatar));
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(UserResponse::from(&user))
    }
}

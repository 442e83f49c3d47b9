//! User entity <-> model mapper

use setlist_core::entities::User;
use setlist_core::error::DomainError;

use crate::models::UserModel;
use crate::repositories::decode_code;

/// Convert UserModel to User entity
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            email: model.email,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            bio: model.bio,
            avatar: model.avatar,
            role: decode_code(model.role)?,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

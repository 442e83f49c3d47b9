//! User entity - an audience member, singer, venue operator or admin

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::traits::Entity;
use crate::value_objects::UserRole;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(
        id: Uuid,
        email: String,
        username: String,
        first_name: String,
        last_name: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            username,
            first_name,
            last_name,
            phone_number: None,
            bio: None,
            avatar: None,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last", falling back to the username when both are blank
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Update the personal names
    pub fn set_names(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.updated_at = Utc::now();
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
        self.updated_at = Utc::now();
    }

    pub fn set_bio(&mut self, bio: Option<String>) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }

    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.avatar = avatar;
        self.updated_at = Utc::now();
    }
}

impl Entity for User {
    type Id = Uuid;
    const NAME: &'static str = "user";

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::UserNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> User {
        User::new(
            Uuid::new_v4(),
            "ana@example.com".to_string(),
            "ana".to_string(),
            first.to_string(),
            last.to_string(),
            UserRole::Audience,
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = user("Ana", "Silva");
        assert!(user.is_active);
        assert_eq!(user.role, UserRole::Audience);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(user("Ana", "Silva").full_name(), "Ana Silva");
        assert_eq!(user("Ana", "").full_name(), "Ana");
        assert_eq!(user("", " ").full_name(), "ana");
    }

    #[test]
    fn test_setters_touch_updated_at() {
        let mut user = user("Ana", "Silva");
        let before = user.updated_at;
        user.set_bio(Some("karaoke regular".to_string()));
        assert!(user.updated_at >= before);
        assert_eq!(user.bio.as_deref(), Some("karaoke regular"));
    }
}

//! Generic storage contract shared by every entity
//!
//! [`Store`] covers the operations every persisted entity supports. Queries
//! that only make sense for one entity live in capability traits that extend
//! it (see [`super::repositories`]).

use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;

use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A persisted record with a stable identity
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Lowercase name used in logs
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    /// The error reported when a record with `id` does not exist
    fn not_found(id: Self::Id) -> DomainError;
}

#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Find a live record by ID
    async fn find_by_id(&self, id: E::Id) -> RepoResult<Option<E>>;

    /// Find all live records among `ids`, in no particular order
    async fn find_by_ids(&self, ids: &[E::Id]) -> RepoResult<Vec<E>>;

    /// Insert a new record
    async fn create(&self, entity: &E) -> RepoResult<()>;

    /// Persist changes to an existing record
    async fn update(&self, entity: &E) -> RepoResult<()>;

    /// Soft delete a record
    async fn delete(&self, id: E::Id) -> RepoResult<()>;

    /// Check whether a live record exists
    async fn exists(&self, id: E::Id) -> RepoResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Find a record, turning absence into the entity's not-found error
    async fn get(&self, id: E::Id) -> RepoResult<E> {
        self.find_by_id(id).await?.ok_or_else(|| E::not_found(id))
    }
}

/// Connectivity check for whatever backs the stores
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Short backend name for health output
    fn backend(&self) -> &'static str;

    /// Succeeds when the backend can serve queries
    async fn ping(&self) -> RepoResult<()>;
}

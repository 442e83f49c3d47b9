//! Generic in-memory table

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use setlist_core::error::DomainError;
use setlist_core::traits::{Entity, RepoResult, Store};

/// A uniqueness rule over live rows, the in-memory twin of a partial
/// unique index
pub struct UniqueKey<E> {
    name: &'static str,
    key: fn(&E) -> String,
    on_conflict: fn() -> DomainError,
}

impl<E> UniqueKey<E> {
    pub fn new(name: &'static str, key: fn(&E) -> String, on_conflict: fn() -> DomainError) -> Self {
        Self {
            name,
            key,
            on_conflict,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Rows of one entity kind behind a single lock
///
/// Every check-then-write happens under the write guard, so unique keys
/// hold under concurrent callers exactly as the database index would.
/// The guard is never held across an `.await`.
pub struct MemoryStore<E: Entity> {
    rows: RwLock<HashMap<E::Id, E>>,
    unique: Vec<UniqueKey<E>>,
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            unique: Vec::new(),
        }
    }

    /// Add a uniqueness rule
    pub fn with_unique(mut self, key: UniqueKey<E>) -> Self {
        self.unique.push(key);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Clone every row matching `predicate`
    pub fn select<P>(&self, predicate: P) -> Vec<E>
    where
        P: Fn(&E) -> bool,
    {
        self.rows
            .read()
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// First row matching `predicate`
    pub fn find_first<P>(&self, predicate: P) -> Option<E>
    where
        P: Fn(&E) -> bool,
    {
        self.rows.read().values().find(|row| predicate(row)).cloned()
    }

    /// Mutate one row in place under the write lock
    pub fn modify<R, F>(&self, id: E::Id, f: F) -> RepoResult<R>
    where
        F: FnOnce(&mut E) -> R,
    {
        let mut rows = self.rows.write();
        let row = rows.get_mut(&id).ok_or_else(|| E::not_found(id))?;
        Ok(f(row))
    }

    /// Fail if `entity` collides with a live row other than itself
    fn check_unique(&self, rows: &HashMap<E::Id, E>, entity: &E) -> RepoResult<()> {
        let own_id = entity.id();
        for rule in &self.unique {
            let wanted = (rule.key)(entity);
            let clash = rows
                .values()
                .any(|row| row.id() != own_id && (rule.key)(row) == wanted);
            if clash {
                tracing::debug!(entity = E::NAME, key = rule.name, "Unique key violated");
                return Err((rule.on_conflict)());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn find_by_id(&self, id: E::Id) -> RepoResult<Option<E>> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[E::Id]) -> RepoResult<Vec<E>> {
        let rows = self.rows.read();
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }

    async fn create(&self, entity: &E) -> RepoResult<()> {
        let mut rows = self.rows.write();
        if rows.contains_key(&entity.id()) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate {} id {}",
                E::NAME,
                entity.id()
            )));
        }
        self.check_unique(&rows, entity)?;
        rows.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> RepoResult<()> {
        let mut rows = self.rows.write();
        if !rows.contains_key(&entity.id()) {
            return Err(E::not_found(entity.id()));
        }
        self.check_unique(&rows, entity)?;
        rows.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn delete(&self, id: E::Id) -> RepoResult<()> {
        self.rows
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| E::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use setlist_core::entities::Genre;
    use uuid::Uuid;

    use super::*;

    fn genres() -> MemoryStore<Genre> {
        MemoryStore::new().with_unique(UniqueKey::new(
            "genres_name_key",
            |g: &Genre| g.name.to_lowercase(),
            || DomainError::GenreAlreadyExists,
        ))
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = genres();
        let jazz = Genre::new(Uuid::new_v4(), "Jazz".to_string());
        store.create(&jazz).await.unwrap();

        assert_eq!(store.find_by_id(jazz.id).await.unwrap(), Some(jazz.clone()));
        assert!(store.exists(jazz.id).await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_unique_key_is_case_insensitive() {
        let store = genres();
        store.create(&Genre::new(Uuid::new_v4(), "Jazz".to_string())).await.unwrap();

        let err = store
            .create(&Genre::new(Uuid::new_v4(), "JAZZ".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::GenreAlreadyExists));
    }

    #[tokio::test]
    async fn test_update_may_keep_its_own_key() {
        let store = genres();
        let mut jazz = Genre::new(Uuid::new_v4(), "Jazz".to_string());
        store.create(&jazz).await.unwrap();

        jazz.description = Some("Swing and bebop".to_string());
        store.update(&jazz).await.unwrap();
        assert_eq!(store.get(jazz.id).await.unwrap().description, jazz.description);
    }

    #[tokio::test]
    async fn test_deleted_rows_free_their_keys() {
        let store = genres();
        let jazz = Genre::new(Uuid::new_v4(), "Jazz".to_string());
        store.create(&jazz).await.unwrap();
        store.delete(jazz.id).await.unwrap();

        assert!(store.find_by_id(jazz.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete(jazz.id).await.unwrap_err(),
            DomainError::GenreNotFound(_)
        ));
        store.create(&Genre::new(Uuid::new_v4(), "jazz".to_string())).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_reports_entity_not_found() {
        let store = genres();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get(id).await.unwrap_err(),
            DomainError::GenreNotFound(missing) if missing == id
        ));
    }
}

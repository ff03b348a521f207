//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic key-value storage trait.
///
/// Mirrors the operation set of the backing store: full-collection scan,
/// point lookup, full-item upsert and delete by key. There is no
/// create/update distinction at this level; `put` overwrites whatever is
/// stored under the entity's key.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities, in no particular order
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Writes the full entity unconditionally (insert or replace)
    async fn put(&self, entity: E) -> Result<(), DomainError>;

    /// Deletes an entity by its key, returns true if an item was removed
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    /// Checks if an entity exists by its key
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }
}

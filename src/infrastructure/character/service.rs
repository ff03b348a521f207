//! Character service - the storage access layer for character records
//!
//! Each method performs exactly one domain operation against the store.
//! Create and update re-fetch the written record so callers see exactly
//! what was persisted; delete returns the refreshed list so a caller can
//! rebuild its view in one round trip.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::storage::Storage;
use crate::domain::{Character, CharacterDraft, CharacterId, DomainError};

/// Upper bound (exclusive) for generated numeric ids.
///
/// Ids are not collision-checked, which is acceptable only while the
/// collection stays small.
const ID_SPACE: u32 = 100_000_000;

/// Character service for CRUD operations
#[derive(Debug)]
pub struct CharacterService {
    storage: Arc<dyn Storage<Character>>,
}

impl CharacterService {
    /// Create a new CharacterService over the given storage handle
    pub fn new(storage: Arc<dyn Storage<Character>>) -> Self {
        Self { storage }
    }

    /// List all characters, in no particular order
    pub async fn list(&self) -> Result<Vec<Character>, DomainError> {
        debug!("listing characters");
        self.storage.list().await
    }

    /// Get a character by id, returning an error if not found
    pub async fn get(&self, id: &CharacterId) -> Result<Character, DomainError> {
        debug!(%id, "getting character");
        self.storage
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("character '{}' not found", id)))
    }

    /// Create a new character under a freshly generated id
    pub async fn create(&self, draft: CharacterDraft) -> Result<Character, DomainError> {
        let id = generate_id();
        info!(%id, name = %draft.name, "creating character");

        self.storage.put(draft.into_character(id.clone())).await?;

        // Read back what the store persisted rather than echoing the input
        self.get(&id).await
    }

    /// Replace an existing character wholesale.
    ///
    /// Requires the id to exist; creating a record under a caller-chosen id
    /// is not supported.
    pub async fn update(
        &self,
        id: &CharacterId,
        draft: CharacterDraft,
    ) -> Result<Character, DomainError> {
        info!(%id, name = %draft.name, "updating character");

        if !self.storage.exists(id).await? {
            return Err(DomainError::not_found(format!(
                "character '{}' not found",
                id
            )));
        }

        self.storage.put(draft.into_character(id.clone())).await?;
        self.get(id).await
    }

    /// Delete a character by id and return the remaining collection.
    ///
    /// Deleting a nonexistent id is not an error.
    pub async fn delete(&self, id: &CharacterId) -> Result<Vec<Character>, DomainError> {
        info!(%id, "deleting character");

        let removed = self.storage.delete(id).await?;
        debug!(%id, removed, "delete finished");

        self.list().await
    }
}

fn generate_id() -> CharacterId {
    CharacterId::new(rand::thread_rng().gen_range(0..ID_SPACE).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attributes;
    use crate::domain::storage::mock::MockStorage;
    use crate::infrastructure::storage::InMemoryStorage;

    fn service() -> CharacterService {
        let storage: Arc<InMemoryStorage<Character>> = Arc::new(InMemoryStorage::new());
        CharacterService::new(storage)
    }

    fn aria_draft() -> CharacterDraft {
        CharacterDraft::new(
            "Aria",
            Attributes {
                strength: 10,
                dexterity: 12,
                constitution: 9,
                wisdom: 14,
                intelligence: 8,
                charisma: 11,
            },
        )
    }

    #[tokio::test]
    async fn test_create_echoes_submitted_fields() {
        let service = service();

        let created = service.create(aria_draft()).await.unwrap();

        assert_eq!(created.name, "Aria");
        assert_eq!(created.attributes, aria_draft().attributes);
    }

    #[tokio::test]
    async fn test_create_assigns_numeric_id() {
        let service = service();

        let created = service.create(aria_draft()).await.unwrap();

        assert!(!created.id.as_str().is_empty());
        let numeric: u32 = created.id.as_str().parse().unwrap();
        assert!(numeric < ID_SPACE);
    }

    #[tokio::test]
    async fn test_get_after_create_round_trips() {
        let service = service();

        let created = service.create(aria_draft()).await.unwrap();
        let fetched = service.get(&created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_absent_id_faults() {
        let service = service();

        let err = service.get(&CharacterId::new("404")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_existing_replaces_whole_record() {
        let service = service();
        let created = service.create(aria_draft()).await.unwrap();

        let replacement = CharacterDraft::new(
            "Aria the Bold",
            Attributes {
                strength: 18,
                dexterity: 12,
                constitution: 9,
                wisdom: 14,
                intelligence: 8,
                charisma: 11,
            },
        );
        let updated = service.update(&created.id, replacement.clone()).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Aria the Bold");
        assert_eq!(updated.attributes.strength, 18);

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_faults() {
        let service = service();

        let err = service
            .update(&CharacterId::new("404"), aria_draft())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_and_returns_remainder() {
        let service = service();
        let aria = service.create(aria_draft()).await.unwrap();
        let borin = service
            .create(CharacterDraft::new("Borin", aria_draft().attributes))
            .await
            .unwrap();

        let remaining = service.delete(&aria.id).await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, borin.id);
        assert!(service.get(&aria.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_id_does_not_fault() {
        let service = service();
        service.create(aria_draft()).await.unwrap();

        let remaining = service.delete(&CharacterId::new("404")).await.unwrap();

        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_then_n() {
        let service = service();

        assert!(service.list().await.unwrap().is_empty());

        for _ in 0..3 {
            service.create(aria_draft()).await.unwrap();
        }

        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_storage_fault_propagates() {
        let storage: MockStorage<Character> = MockStorage::new().with_error("scan throttled");
        let service = CharacterService::new(Arc::new(storage));

        let err = service.list().await.unwrap_err();
        assert!(err.to_string().contains("scan throttled"));
        assert!(!err.is_not_found());
    }
}

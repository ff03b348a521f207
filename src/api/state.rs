//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Character, CharacterDraft, CharacterId, DomainError};
use crate::infrastructure::character::CharacterService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub character_service: Arc<dyn CharacterServiceTrait>,
}

impl AppState {
    pub fn new(character_service: Arc<dyn CharacterServiceTrait>) -> Self {
        Self { character_service }
    }
}

/// Trait for character service operations
#[async_trait::async_trait]
pub trait CharacterServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, DomainError>;
    async fn get(&self, id: &CharacterId) -> Result<Character, DomainError>;
    async fn create(&self, draft: CharacterDraft) -> Result<Character, DomainError>;
    async fn update(
        &self,
        id: &CharacterId,
        draft: CharacterDraft,
    ) -> Result<Character, DomainError>;
    async fn delete(&self, id: &CharacterId) -> Result<Vec<Character>, DomainError>;
}

#[async_trait::async_trait]
impl CharacterServiceTrait for CharacterService {
    async fn list(&self) -> Result<Vec<Character>, DomainError> {
        CharacterService::list(self).await
    }

    async fn get(&self, id: &CharacterId) -> Result<Character, DomainError> {
        CharacterService::get(self, id).await
    }

    async fn create(&self, draft: CharacterDraft) -> Result<Character, DomainError> {
        CharacterService::create(self, draft).await
    }

    async fn update(
        &self,
        id: &CharacterId,
        draft: CharacterDraft,
    ) -> Result<Character, DomainError> {
        CharacterService::update(self, id, draft).await
    }

    async fn delete(&self, id: &CharacterId) -> Result<Vec<Character>, DomainError> {
        CharacterService::delete(self, id).await
    }
}

//! Domain layer - Core entities and the storage abstraction

pub mod character;
pub mod error;
pub mod storage;

pub use character::{Attributes, Character, CharacterDraft, CharacterId};
pub use error::DomainError;
pub use storage::{Storage, StorageEntity, StorageKey};

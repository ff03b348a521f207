//! Character Vault API
//!
//! A GraphQL CRUD service over a collection of character records:
//! - Typed schema with one entity type and a nested attributes object
//! - Storage access layer over DynamoDB, with an in-memory backend for
//!   tests and local development
//! - One long-lived store client per process, passed explicitly

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::Character;
use domain::storage::Storage;
use infrastructure::character::CharacterService;
use infrastructure::storage::{StorageFactory, StorageType, create_client};

/// Create the application state with the storage backend from configuration.
///
/// The DynamoDB client is constructed here, once per process, and handed to
/// the storage layer explicitly so tests can substitute an in-memory fake.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend =
        StorageType::from_str(&config.storage.backend).unwrap_or(StorageType::InMemory);

    info!("Storage backend: {:?}", backend);

    let storage: Arc<dyn Storage<Character>> = match backend {
        StorageType::DynamoDb => {
            let client = create_client(config.storage.region.clone()).await;
            info!(table = %config.storage.table, "DynamoDB client initialized");
            StorageFactory::create_dynamodb_with_client::<Character>(client, &config.storage.table)
        }
        StorageType::InMemory => StorageFactory::create_in_memory::<Character>(),
    };

    let character_service = Arc::new(CharacterService::new(storage));

    Ok(AppState::new(character_service))
}

//! Storage factory for runtime backend selection

use std::sync::Arc;

use aws_sdk_dynamodb::Client;

use crate::domain::storage::StorageEntity;

use super::dynamodb::{DynamoDbStorage, DynamoItem};
use super::in_memory::InMemoryStorage;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// DynamoDB storage
    DynamoDb,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "dynamodb" | "dynamo" | "ddb" => Some(Self::DynamoDb),
            _ => None,
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates an in-memory storage
    pub fn create_in_memory<E>() -> Arc<InMemoryStorage<E>>
    where
        E: StorageEntity,
    {
        Arc::new(InMemoryStorage::new())
    }

    /// Creates a DynamoDB storage from an already-constructed client.
    ///
    /// The client is built once per process and shared; see
    /// [`super::dynamodb::create_client`].
    pub fn create_dynamodb_with_client<E>(
        client: Client,
        table: impl Into<String>,
    ) -> Arc<DynamoDbStorage<E>>
    where
        E: DynamoItem + 'static,
    {
        Arc::new(DynamoDbStorage::new(client, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(
            StorageType::from_str("inmemory"),
            Some(StorageType::InMemory)
        );
        assert_eq!(
            StorageType::from_str("in-memory"),
            Some(StorageType::InMemory)
        );
        assert_eq!(
            StorageType::from_str("dynamodb"),
            Some(StorageType::DynamoDb)
        );
        assert_eq!(StorageType::from_str("DynamoDB"), Some(StorageType::DynamoDb));
        assert_eq!(StorageType::from_str("ddb"), Some(StorageType::DynamoDb));
        assert_eq!(StorageType::from_str("unknown"), None);
    }

    #[test]
    fn test_create_in_memory() {
        use crate::domain::Character;

        let storage = StorageFactory::create_in_memory::<Character>();
        assert!(format!("{:?}", storage).contains("InMemoryStorage"));
    }
}

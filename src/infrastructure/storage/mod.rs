//! Storage infrastructure - Storage implementations

mod dynamodb;
mod factory;
mod in_memory;

pub use dynamodb::{DynamoDbStorage, DynamoItem, create_client};
pub use factory::{StorageFactory, StorageType};
pub use in_memory::InMemoryStorage;

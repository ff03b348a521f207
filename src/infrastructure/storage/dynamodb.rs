//! DynamoDB storage implementation
//!
//! Talks to a pre-provisioned table with a string partition key. Table
//! creation, IAM and capacity are deployment concerns, not handled here.

use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::error;

use crate::domain::DomainError;
use crate::domain::character::{Attributes, Character, CharacterId};
use crate::domain::storage::{Storage, StorageEntity, StorageKey};

/// Entities that can be marshalled to and from a DynamoDB item
pub trait DynamoItem: StorageEntity {
    /// Name of the partition key attribute in the table
    const KEY_ATTRIBUTE: &'static str;

    /// Encodes the full entity as a native item
    fn to_item(&self) -> HashMap<String, AttributeValue>;

    /// Decodes a native item back into the entity
    fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, DomainError>;
}

/// DynamoDB-backed storage.
///
/// Holds a clone of the process-wide SDK client; the client is cheap to
/// clone and reuses its connection pool across handles.
#[derive(Debug, Clone)]
pub struct DynamoDbStorage<E> {
    client: Client,
    table: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> DynamoDbStorage<E> {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            _entity: PhantomData,
        }
    }

    /// The table this storage reads and writes
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl<E> Storage<E> for DynamoDbStorage<E>
where
    E: DynamoItem + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(E::KEY_ATTRIBUTE, AttributeValue::S(key.as_str().to_string()))
            .send()
            .await
            .map_err(|e| {
                let context = DisplayErrorContext(&e);
                error!(table = %self.table, "GetItem failed: {}", context);
                DomainError::storage(format!("GetItem failed: {}", context))
            })?;

        match output.item() {
            Some(item) => Ok(Some(E::from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        // Single-page scan. Collections larger than one page are truncated,
        // a documented scaling limit of this service.
        let output = self
            .client
            .scan()
            .table_name(&self.table)
            .send()
            .await
            .map_err(|e| {
                let context = DisplayErrorContext(&e);
                error!(table = %self.table, "Scan failed: {}", context);
                DomainError::storage(format!("Scan failed: {}", context))
            })?;

        output.items().iter().map(E::from_item).collect()
    }

    async fn put(&self, entity: E) -> Result<(), DomainError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(entity.to_item()))
            .send()
            .await
            .map_err(|e| {
                let context = DisplayErrorContext(&e);
                error!(table = %self.table, "PutItem failed: {}", context);
                DomainError::storage(format!("PutItem failed: {}", context))
            })?;

        Ok(())
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table)
            .key(E::KEY_ATTRIBUTE, AttributeValue::S(key.as_str().to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| {
                let context = DisplayErrorContext(&e);
                error!(table = %self.table, "DeleteItem failed: {}", context);
                DomainError::storage(format!("DeleteItem failed: {}", context))
            })?;

        Ok(output.attributes().is_some())
    }
}

/// Builds the process-wide DynamoDB client from the ambient AWS environment,
/// with an optional region override from configuration
pub async fn create_client(region: Option<String>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = region {
        loader = loader.region(aws_config::Region::new(region));
    }

    Client::new(&loader.load().await)
}

impl DynamoItem for Character {
    const KEY_ATTRIBUTE: &'static str = "id";

    fn to_item(&self) -> HashMap<String, AttributeValue> {
        let attributes = HashMap::from([
            ("strength".to_string(), number(self.attributes.strength)),
            ("dexterity".to_string(), number(self.attributes.dexterity)),
            (
                "constitution".to_string(),
                number(self.attributes.constitution),
            ),
            ("wisdom".to_string(), number(self.attributes.wisdom)),
            (
                "intelligence".to_string(),
                number(self.attributes.intelligence),
            ),
            ("charisma".to_string(), number(self.attributes.charisma)),
        ]);

        HashMap::from([
            (
                "id".to_string(),
                AttributeValue::S(self.id.as_str().to_string()),
            ),
            ("name".to_string(), AttributeValue::S(self.name.clone())),
            ("attributes".to_string(), AttributeValue::M(attributes)),
        ])
    }

    fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, DomainError> {
        let nested = map_field(item, "attributes")?;

        Ok(Character {
            id: CharacterId::new(string_field(item, "id")?),
            name: string_field(item, "name")?,
            attributes: Attributes {
                strength: int_field(nested, "strength")?,
                dexterity: int_field(nested, "dexterity")?,
                constitution: int_field(nested, "constitution")?,
                wisdom: int_field(nested, "wisdom")?,
                intelligence: int_field(nested, "intelligence")?,
                charisma: int_field(nested, "charisma")?,
            },
        })
    }
}

fn number(value: i32) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

fn string_field(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, DomainError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| DomainError::storage(format!("item missing string attribute '{}'", name)))
}

fn int_field(item: &HashMap<String, AttributeValue>, name: &str) -> Result<i32, DomainError> {
    let raw = item
        .get(name)
        .and_then(|value| value.as_n().ok())
        .ok_or_else(|| DomainError::storage(format!("item missing number attribute '{}'", name)))?;

    raw.parse().map_err(|e| {
        DomainError::storage(format!("attribute '{}' is not an integer: {}", name, e))
    })
}

fn map_field<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a HashMap<String, AttributeValue>, DomainError> {
    item.get(name)
        .and_then(|value| value.as_m().ok())
        .ok_or_else(|| DomainError::storage(format!("item missing map attribute '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aria() -> Character {
        Character {
            id: CharacterId::new("42"),
            name: "Aria".to_string(),
            attributes: Attributes {
                strength: 10,
                dexterity: 12,
                constitution: 9,
                wisdom: 14,
                intelligence: 8,
                charisma: 11,
            },
        }
    }

    #[test]
    fn test_item_round_trip() {
        let character = aria();
        let item = character.to_item();

        assert_eq!(item["id"], AttributeValue::S("42".to_string()));
        assert_eq!(item["name"], AttributeValue::S("Aria".to_string()));

        let decoded = Character::from_item(&item).unwrap();
        assert_eq!(decoded, character);
    }

    #[test]
    fn test_attributes_encode_as_nested_map() {
        let item = aria().to_item();

        let nested = item["attributes"].as_m().unwrap();
        assert_eq!(nested["strength"], AttributeValue::N("10".to_string()));
        assert_eq!(nested["charisma"], AttributeValue::N("11".to_string()));
        assert_eq!(nested.len(), 6);
    }

    #[test]
    fn test_from_item_missing_name_fails() {
        let mut item = aria().to_item();
        item.remove("name");

        let err = Character::from_item(&item).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_from_item_missing_score_fails() {
        let mut item = aria().to_item();
        let mut nested = item["attributes"].as_m().unwrap().clone();
        nested.remove("wisdom");
        item.insert("attributes".to_string(), AttributeValue::M(nested));

        let err = Character::from_item(&item).unwrap_err();
        assert!(err.to_string().contains("wisdom"));
    }

    #[test]
    fn test_from_item_non_numeric_score_fails() {
        let mut item = aria().to_item();
        let mut nested = item["attributes"].as_m().unwrap().clone();
        nested.insert(
            "strength".to_string(),
            AttributeValue::N("not-a-number".to_string()),
        );
        item.insert("attributes".to_string(), AttributeValue::M(nested));

        let err = Character::from_item(&item).unwrap_err();
        assert!(err.to_string().contains("strength"));
    }
}

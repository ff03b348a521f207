//! Character entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};

/// Character identifier - an opaque string, assigned by the server at
/// creation time as a decimal rendering of a random number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CharacterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CharacterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CharacterId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// The six ability scores carried by every character.
///
/// Always written and read as a whole; there are no partial updates of a
/// single score. No range constraints are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub wisdom: i32,
    pub intelligence: i32,
    pub charisma: i32,
}

/// Character entity - the sole stored record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub attributes: Attributes,
}

impl StorageEntity for Character {
    type Key = CharacterId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

/// A character without an identity yet - the write payload for create and
/// update, where the id is assigned or supplied separately
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDraft {
    pub name: String,
    pub attributes: Attributes,
}

impl CharacterDraft {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Promotes the draft to a full record under the given id
    pub fn into_character(self, id: CharacterId) -> Character {
        Character {
            id,
            name: self.name,
            attributes: self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attributes() -> Attributes {
        Attributes {
            strength: 10,
            dexterity: 12,
            constitution: 9,
            wisdom: 14,
            intelligence: 8,
            charisma: 11,
        }
    }

    #[test]
    fn test_character_key_is_id() {
        let character = Character {
            id: CharacterId::new("42"),
            name: "Aria".to_string(),
            attributes: sample_attributes(),
        };
        assert_eq!(character.key().as_str(), "42");
    }

    #[test]
    fn test_draft_into_character() {
        let draft = CharacterDraft::new("Aria", sample_attributes());
        let character = draft.into_character(CharacterId::new("7"));

        assert_eq!(character.id.as_str(), "7");
        assert_eq!(character.name, "Aria");
        assert_eq!(character.attributes, sample_attributes());
    }

    #[test]
    fn test_character_serde_round_trip() {
        let character = Character {
            id: CharacterId::new("42"),
            name: "Aria".to_string(),
            attributes: sample_attributes(),
        };

        let json = serde_json::to_string(&character).unwrap();
        assert!(json.contains("\"id\":\"42\""));
        assert!(json.contains("\"strength\":10"));

        let parsed: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, character);
    }
}

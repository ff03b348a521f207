//! GraphQL object types mirroring the domain records

use async_graphql::SimpleObject;

use crate::domain;

/// A stored character record
#[derive(Debug, Clone, SimpleObject)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub attributes: Attributes,
}

/// The six ability scores of a character
#[derive(Debug, Clone, SimpleObject)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub wisdom: i32,
    pub intelligence: i32,
    pub charisma: i32,
}

impl From<domain::Character> for Character {
    fn from(character: domain::Character) -> Self {
        Self {
            id: character.id.as_str().to_string(),
            name: character.name,
            attributes: character.attributes.into(),
        }
    }
}

impl From<domain::Attributes> for Attributes {
    fn from(attributes: domain::Attributes) -> Self {
        Self {
            strength: attributes.strength,
            dexterity: attributes.dexterity,
            constitution: attributes.constitution,
            wisdom: attributes.wisdom,
            intelligence: attributes.intelligence,
            charisma: attributes.charisma,
        }
    }
}

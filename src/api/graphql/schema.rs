//! GraphQL schema - queries and mutations over the character collection
//!
//! Each resolver binds one schema operation to exactly one character
//! service call. Service faults surface as GraphQL field errors rather
//! than malformed success payloads.

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};

use crate::api::state::AppState;
use crate::domain::{self, CharacterDraft, CharacterId};

use super::types::Character;

pub type CharacterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema with the application state attached.
///
/// Introspection stays enabled unconditionally; the playground relies on it.
pub fn build_schema(state: AppState) -> CharacterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All stored characters, in no particular order
    async fn characters(&self, ctx: &Context<'_>) -> Result<Vec<Character>> {
        let state = ctx.data_unchecked::<AppState>();
        let characters = state.character_service.list().await?;

        Ok(characters.into_iter().map(Character::from).collect())
    }

    /// A single character by id
    async fn character(&self, ctx: &Context<'_>, id: String) -> Result<Character> {
        let state = ctx.data_unchecked::<AppState>();
        let character = state.character_service.get(&CharacterId::new(id)).await?;

        Ok(character.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a character under a server-assigned id and returns the
    /// persisted record
    #[allow(clippy::too_many_arguments)]
    async fn add_character(
        &self,
        ctx: &Context<'_>,
        name: String,
        strength: i32,
        dexterity: i32,
        constitution: i32,
        wisdom: i32,
        intelligence: i32,
        charisma: i32,
    ) -> Result<Character> {
        let state = ctx.data_unchecked::<AppState>();
        let draft = CharacterDraft::new(
            name,
            domain::Attributes {
                strength,
                dexterity,
                constitution,
                wisdom,
                intelligence,
                charisma,
            },
        );

        Ok(state.character_service.create(draft).await?.into())
    }

    /// Replaces an existing character wholesale; errors if the id is unknown
    #[allow(clippy::too_many_arguments)]
    async fn update_character(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: String,
        strength: i32,
        dexterity: i32,
        constitution: i32,
        wisdom: i32,
        intelligence: i32,
        charisma: i32,
    ) -> Result<Character> {
        let state = ctx.data_unchecked::<AppState>();
        let draft = CharacterDraft::new(
            name,
            domain::Attributes {
                strength,
                dexterity,
                constitution,
                wisdom,
                intelligence,
                charisma,
            },
        );

        let updated = state
            .character_service
            .update(&CharacterId::new(id), draft)
            .await?;

        Ok(updated.into())
    }

    /// Deletes a character by id and returns the remaining collection.
    /// Deleting an unknown id succeeds and leaves the collection unchanged.
    async fn delete_character(&self, ctx: &Context<'_>, id: String) -> Result<Vec<Character>> {
        let state = ctx.data_unchecked::<AppState>();
        let remaining = state
            .character_service
            .delete(&CharacterId::new(id))
            .await?;

        Ok(remaining.into_iter().map(Character::from).collect())
    }
}

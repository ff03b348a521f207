//! Character domain - the stored record type and its identity

mod entity;

pub use entity::{Attributes, Character, CharacterDraft, CharacterId};

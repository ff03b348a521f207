//! Character infrastructure - storage access layer

mod service;

pub use service::CharacterService;

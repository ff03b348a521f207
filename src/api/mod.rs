//! API layer - GraphQL endpoint, health probes and routing

pub mod graphql;
pub mod health;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

//! GraphQL endpoint - schema, object types and the playground handler

pub mod schema;
pub mod types;

use async_graphql::http::GraphiQLSource;
use axum::response::{Html, IntoResponse};

pub use schema::{CharacterSchema, MutationRoot, QueryRoot, build_schema};

/// Serves the GraphiQL playground for interactive exploration
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

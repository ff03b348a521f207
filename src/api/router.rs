use async_graphql_axum::GraphQL;
use axum::{Router, http::Method, http::header, routing::get};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::graphql;
use super::health;
use super::state::AppState;

/// Create the application router.
///
/// `/graphql` serves the playground on GET and executes operations on POST;
/// health endpoints sit alongside for probes.
pub fn create_router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route(
            "/graphql",
            get(graphql::graphiql).post_service(GraphQL::new(schema)),
        )
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin access from any origin, with credentials allowed.
///
/// Credentialed requests forbid the wildcard origin, so the request origin
/// is mirrored back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]))
        .allow_credentials(true)
}

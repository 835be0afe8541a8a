use super::{
    handlers::{cities, docs, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Cities CRUD
        .route("/cities", get(cities::list_cities).post(cities::create_city))
        .route(
            "/cities/{id}",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        )
        // Docs
        .route("/api-docs", get(docs::api_docs_ui))
        .route("/api-docs/openapi.json", get(docs::api_docs))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

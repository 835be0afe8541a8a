use axum::{Json, response::Html};
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::Scalar;

use super::{cities, health};
use crate::presentation::http::errors::ErrorMessage;

/// A stored city as it appears on the wire.
///
/// Only documents the recognized fields. Any extra field a client sends is
/// stored and returned verbatim alongside these.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct City {
    /// Server-assigned, never reused
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Addis Ababa")]
    pub name: String,
    #[schema(example = 5000000)]
    pub population: Option<i64>,
    #[schema(example = "Ethiopia")]
    pub country: Option<String>,
}

/// Body accepted by create and update. A client-supplied `id` is ignored.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CityInput {
    #[schema(example = "Addis Ababa")]
    pub name: String,
    #[schema(example = 5000000)]
    pub population: Option<i64>,
    #[schema(example = "Ethiopia")]
    pub country: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "City Registry API",
        version = "1.0.0",
        description = "Create, read, update and delete city records held in memory."
    ),
    paths(
        cities::list_cities,
        cities::get_city,
        cities::create_city,
        cities::update_city,
        cities::delete_city,
        health::health_check,
    ),
    components(schemas(City, CityInput, ErrorMessage, health::HealthResponse)),
    tags(
        (name = "cities", description = "City records"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Raw OpenAPI document.
pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Interactive documentation page with the OpenAPI document embedded.
pub async fn api_docs_ui() -> Html<String> {
    Html(Scalar::new(ApiDoc::openapi()).to_html())
}

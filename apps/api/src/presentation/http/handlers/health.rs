use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    cities: usize,
    version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let cities = state.cities.find_all().await?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        cities,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

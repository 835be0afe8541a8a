use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::city::{
        CITY_NOT_FOUND,
        entity::{City, CityPayload},
    },
    presentation::http::{
        errors::{AppError, ErrorMessage},
        handlers::docs::{self, CityInput},
        state::AppState,
    },
};

/// Ids that do not parse as `u64` (an optional leading `+` is accepted) never match a city.
fn parse_city_id(raw: &str) -> Result<u64, AppError> {
    raw.parse::<u64>()
        .map_err(|_| AppError::NotFound(CITY_NOT_FOUND.to_string()))
}

// `name` is documented as required but stored as sent. Log the gap so it is
// visible in the access log without rejecting the request.
fn warn_if_unnamed(action: &str, payload: &CityPayload) {
    if !payload.get("name").is_some_and(|v| v.is_string()) {
        tracing::warn!(action, "city payload has no string `name`; storing as sent");
    }
}

#[utoipa::path(
    get,
    path = "/cities",
    tag = "cities",
    responses(
        (status = 200, description = "All cities in insertion order", body = [docs::City])
    )
)]
pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<City>>, AppError> {
    let cities = state.cities.find_all().await?;
    Ok(Json(cities))
}

#[utoipa::path(
    get,
    path = "/cities/{id}",
    tag = "cities",
    params(("id" = u64, Path, description = "City id")),
    responses(
        (status = 200, description = "The city", body = docs::City),
        (status = 404, description = "No city with this id", body = ErrorMessage)
    )
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<City>, AppError> {
    let id = parse_city_id(&id)?;
    let city = state
        .cities
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(CITY_NOT_FOUND.to_string()))?;

    Ok(Json(city))
}

#[utoipa::path(
    post,
    path = "/cities",
    tag = "cities",
    request_body = CityInput,
    responses(
        (status = 201, description = "City created", body = docs::City)
    )
)]
pub async fn create_city(
    State(state): State<AppState>,
    Json(payload): Json<CityPayload>,
) -> Result<(StatusCode, Json<City>), AppError> {
    warn_if_unnamed("create", &payload);
    let city = state.cities.create(payload).await?;
    tracing::info!(city_id = city.id, "city created");

    Ok((StatusCode::CREATED, Json(city)))
}

#[utoipa::path(
    put,
    path = "/cities/{id}",
    tag = "cities",
    params(("id" = u64, Path, description = "City id")),
    request_body = CityInput,
    responses(
        (status = 200, description = "City replaced; fields absent from the body are dropped", body = docs::City),
        (status = 404, description = "No city with this id", body = ErrorMessage)
    )
)]
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CityPayload>,
) -> Result<Json<City>, AppError> {
    let id = parse_city_id(&id)?;
    warn_if_unnamed("update", &payload);
    let city = state.cities.replace(id, payload).await?;
    tracing::info!(city_id = city.id, "city replaced");

    Ok(Json(city))
}

#[utoipa::path(
    delete,
    path = "/cities/{id}",
    tag = "cities",
    params(("id" = u64, Path, description = "City id")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 404, description = "No city with this id", body = ErrorMessage)
    )
)]
pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_city_id(&id)?;
    state.cities.delete(id).await?;
    tracing::info!(city_id = id, "city deleted");

    Ok(StatusCode::NO_CONTENT)
}

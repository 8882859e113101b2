use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::venue::CreateVenueRequest, models::Venue, services::catalog};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/venues",
    responses(
        (status = 200, description = "List all venues successfully", body = Vec<Venue>)
    ),
    tag = "venues"
)]
pub async fn list_venues(State(db): State<Database>) -> Result<Json<Vec<Venue>>, WebError> {
    let venues = catalog::list_venues(db.pool()).await?;
    Ok(Json(venues))
}

#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    params(
        ("id" = i64, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue found", body = Venue),
        (status = 404, description = "Venue not found")
    ),
    tag = "venues"
)]
pub async fn get_venue(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let venue = catalog::get_venue(db.pool(), id).await?;

    Ok(Json(venue).into_response())
}

#[utoipa::path(
    post,
    path = "/api/venues",
    request_body = CreateVenueRequest,
    responses(
        (status = 201, description = "Venue created successfully", body = Venue),
        (status = 400, description = "Validation error")
    ),
    tag = "venues"
)]
pub async fn create_venue(
    State(db): State<Database>,
    Json(req): Json<CreateVenueRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let venue = catalog::create_venue(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(venue)).into_response())
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::participant::{CreateParticipantRequest, ParticipantFilter},
    models::Participant,
    services::catalog,
};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/participants",
    params(ParticipantFilter),
    responses(
        (status = 200, description = "Participants, optionally filtered by nationality", body = Vec<Participant>)
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Query(filter): Query<ParticipantFilter>,
) -> Result<Json<Vec<Participant>>, WebError> {
    let participants = catalog::list_participants(db.pool(), &filter).await?;
    Ok(Json(participants))
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(
        ("id" = i64, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant found", body = Participant),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let participant = catalog::get_participant(db.pool(), id).await?;

    Ok(Json(participant).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Participant registered successfully", body = Participant),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Age below the registration floor")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = catalog::create_participant(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(participant)).into_response())
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        event::{CreateEventRequest, EventResponse},
        result::{EnrollParticipantRequest, RecordResultRequest},
    },
    models::{Event, EventParticipant, Schedule},
    services::{catalog, results, schedule},
};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events as originally planned", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<Event>>, WebError> {
    let events = catalog::list_events(db.pool()).await?;
    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event with its live schedule", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let event = catalog::get_event_detailed(db.pool(), id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event and its live schedule created", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Venue does not exist")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = catalog::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/schedule",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Live schedule of the event", body = Schedule),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event_schedule(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let live = schedule::schedule_for_event(db.pool(), id).await?;

    Ok(Json(live).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/participants",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = EnrollParticipantRequest,
    responses(
        (status = 201, description = "Participant enrolled", body = EventParticipant),
        (status = 404, description = "Participant not found"),
        (status = 409, description = "Unknown event or already enrolled"),
        (status = 422, description = "Participant is too young to enroll")
    ),
    tag = "events"
)]
pub async fn enroll_participant(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<EnrollParticipantRequest>,
) -> Result<Response, WebError> {
    let entry = results::enroll_participant(db.pool(), id, req.participant_id).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}/results/{participant_id}",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("participant_id" = i64, Path, description = "Participant ID")
    ),
    request_body = RecordResultRequest,
    responses(
        (status = 200, description = "Result recorded", body = EventParticipant),
        (status = 404, description = "Participant not found"),
        (status = 409, description = "Event does not exist"),
        (status = 422, description = "Participant is too young to enroll")
    ),
    tag = "events"
)]
pub async fn record_result(
    State(db): State<Database>,
    Path((id, participant_id)): Path<(i64, i64)>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    let entry = results::record_result(db.pool(), id, participant_id, &req).await?;

    Ok(Json(entry).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/results",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Results ordered by ranking, unranked last", body = Vec<EventParticipant>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_event_results(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let entries = results::results_for_event(db.pool(), id).await?;

    Ok(Json(entries).into_response())
}

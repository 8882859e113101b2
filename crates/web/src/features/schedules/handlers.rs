use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::schedule::{RescheduleRequest, ScheduleEntry, ScheduleFilter},
    models::{Schedule, ScheduleChange},
    services::{audit, schedule},
};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/schedules",
    params(ScheduleFilter),
    responses(
        (status = 200, description = "Live schedule, optionally for one date", body = Vec<ScheduleEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "schedules"
)]
pub async fn list_schedule(
    State(db): State<Database>,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<Vec<ScheduleEntry>>, WebError> {
    let entries = schedule::list_schedule(db.pool(), &filter).await?;
    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    params(
        ("id" = i64, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Schedule found", body = Schedule),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules"
)]
pub async fn get_schedule(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let live = schedule::get_schedule(db.pool(), id).await?;

    Ok(Json(live).into_response())
}

#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    params(
        ("id" = i64, Path, description = "Schedule ID")
    ),
    request_body = RescheduleRequest,
    responses(
        (status = 200, description = "Schedule moved and change recorded", body = Schedule),
        (status = 404, description = "Schedule not found"),
        (status = 409, description = "Venue does not exist")
    ),
    tag = "schedules"
)]
pub async fn reschedule(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<RescheduleRequest>,
) -> Result<Response, WebError> {
    let updated = schedule::reschedule(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    get,
    path = "/api/schedules/{id}/history",
    params(
        ("id" = i64, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Changes of the schedule, oldest first", body = Vec<ScheduleChange>),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules"
)]
pub async fn schedule_history(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let changes = audit::schedule_history(db.pool(), id).await?;

    Ok(Json(changes).into_response())
}

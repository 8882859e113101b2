use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

use features::{events, participants, schedules, venues};

#[derive(OpenApi)]
#[openapi(
    paths(
        venues::handlers::list_venues,
        venues::handlers::get_venue,
        venues::handlers::create_venue,
        participants::handlers::list_participants,
        participants::handlers::get_participant,
        participants::handlers::create_participant,
        events::handlers::list_events,
        events::handlers::get_event,
        events::handlers::create_event,
        events::handlers::get_event_schedule,
        events::handlers::enroll_participant,
        events::handlers::record_result,
        events::handlers::list_event_results,
        schedules::handlers::list_schedule,
        schedules::handlers::get_schedule,
        schedules::handlers::reschedule,
        schedules::handlers::schedule_history,
    ),
    components(
        schemas(
            storage::dto::venue::CreateVenueRequest,
            storage::dto::participant::CreateParticipantRequest,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::schedule::RescheduleRequest,
            storage::dto::schedule::ScheduleEntry,
            storage::dto::result::EnrollParticipantRequest,
            storage::dto::result::RecordResultRequest,
            storage::models::Venue,
            storage::models::Participant,
            storage::models::Gender,
            storage::models::Event,
            storage::models::Schedule,
            storage::models::ScheduleChange,
            storage::models::EventParticipant,
        )
    ),
    tags(
        (name = "venues", description = "Venue catalog"),
        (name = "participants", description = "Participant registration"),
        (name = "events", description = "Events, enrollments and results"),
        (name = "schedules", description = "Live schedule and its change history"),
    )
)]
pub struct ApiDoc;

/// Builds the full application router on top of `db`.
pub fn app(db: Database) -> Router {
    let api = Router::new()
        .nest("/venues", venues::routes::routes())
        .nest("/participants", participants::routes::routes())
        .nest("/events", events::routes::routes())
        .nest("/schedules", schedules::routes::routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

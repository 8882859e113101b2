use axum::{
    Router,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    create_event, enroll_participant, get_event, get_event_schedule, list_event_results,
    list_events, record_result,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/:id", get(get_event))
        .route("/:id/schedule", get(get_event_schedule))
        .route("/:id/participants", post(enroll_participant))
        .route("/:id/results", get(list_event_results))
        .route("/:id/results/:participant_id", put(record_result))
}

use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_schedule, list_schedule, reschedule, schedule_history};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_schedule))
        .route("/:id", get(get_schedule).put(reschedule))
        .route("/:id/history", get(schedule_history))
}

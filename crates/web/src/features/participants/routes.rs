use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_participant, get_participant, list_participants};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_participants).post(create_participant))
        .route("/:id", get(get_participant))
}

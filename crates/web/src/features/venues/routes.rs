use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_venue, get_venue, list_venues};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_venues).post(create_venue))
        .route("/:id", get(get_venue))
}

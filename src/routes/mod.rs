pub mod submissions;

use axum::routing::{get, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api", get(submissions::list).post(submissions::create))
        .route("/api/", get(submissions::list).post(submissions::create))
        .route(
            "/api/{id}",
            put(submissions::update).delete(submissions::delete),
        )
}

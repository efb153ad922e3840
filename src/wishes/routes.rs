use axum::{
    Router,
    routing::{get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_wishes).post(handler::create_wish))
        .route("/:id/like", post(handler::like_wish))
        .fallback(handler::unknown_route)
}

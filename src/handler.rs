use std::sync::Arc;

use axum::{Json, response::IntoResponse};

use crate::api::HealthResponse;
use crate::config::Board;
use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub board: Board,
}

pub async fn healthcheck() -> impl IntoResponse {
    tracing::debug!("got healthcheck request");
    Json(HealthResponse { status: "ok" })
}

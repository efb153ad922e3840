use crate::api::ErrorResponse;
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::error::Error;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub mod api;
pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod validation;
pub mod wishes;

use handler::AppState;

/// Builds the full HTTP application: the JSON API, the health probe, and the
/// embedded client as fallback for unmatched `GET`s.
pub fn app(state: AppState) -> Router {
    let body_limit = state.board.max_body_bytes;
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handler::healthcheck))
        .nest("/wishes", wishes::routes())
        .fallback(get(assets::serve_embedded))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

pub fn success<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error_response(status: StatusCode, msg: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

pub fn bad_request(msg: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, msg)
}

pub fn not_found(msg: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, msg)
}

pub fn server_error(msg: &str) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
}

/// Joins an error and its sources into one `a: b: c` line for logging.
pub fn unpack_error(err: &dyn Error) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}

//! HTTP handlers for the board.

use std::num::IntErrorKind;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use super::Wishes;
use crate::api::{CreateWishRequest, WishResponse, WishesResponse};
use crate::error::ContentError;
use crate::handler::AppState;
use crate::validation::sanitize_content;
use crate::{bad_request, error_response, not_found, server_error, success, unpack_error};

const INVALID_ID: &str = "유효하지 않은 ID입니다";
const WISH_NOT_FOUND: &str = "소원을 찾을 수 없습니다";

pub async fn unknown_route() -> Response {
    not_found("Not found")
}

pub async fn list_wishes(State(state): State<AppState>) -> Response {
    let store = Wishes::new(state.db.connection(), state.db.utc_offset());

    match store.list_recent(state.board.list_limit).await {
        Ok(wishes) => success(WishesResponse { wishes }),
        Err(e) => {
            tracing::error!(error = %unpack_error(&*e), "failed to get wishes");
            server_error("Failed to get wishes")
        }
    }
}

pub async fn create_wish(
    State(state): State<AppState>,
    payload: Result<Json<CreateWishRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::info!("rejected oversized wish body");
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                &ContentError::BodyTooLarge.to_string(),
            );
        }
        Err(rejection) => {
            tracing::info!(reason = %rejection.body_text(), "rejected malformed wish body");
            return bad_request(&ContentError::MalformedBody.to_string());
        }
    };

    let content = match sanitize_content(payload.content.as_ref(), state.board.max_content_chars) {
        Ok(content) => content,
        Err(e) => {
            tracing::info!(reason = ?e, "rejected wish content");
            return bad_request(&e.to_string());
        }
    };

    let store = Wishes::new(state.db.connection(), state.db.utc_offset());

    match store.create(&content).await {
        Ok(wish) => {
            tracing::info!(id = wish.id, "created wish");
            success(WishResponse::new(wish))
        }
        Err(e) => {
            tracing::error!(error = %unpack_error(&*e), "failed to create wish");
            server_error("Failed to create wish")
        }
    }
}

pub async fn like_wish(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // An integer too large for any row id is still an integer: it just
    // cannot match a wish.
    let id = match id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return not_found(WISH_NOT_FOUND);
        }
        Err(_) => return bad_request(INVALID_ID),
    };

    let store = Wishes::new(state.db.connection(), state.db.utc_offset());

    match store.increment_like(id).await {
        Ok(Some(wish)) => success(WishResponse::new(wish)),
        Ok(None) => not_found(WISH_NOT_FOUND),
        Err(e) => {
            tracing::error!(id, error = %unpack_error(&*e), "failed to like wish");
            server_error("좋아요 추가에 실패했습니다")
        }
    }
}

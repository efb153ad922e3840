use crate::model::Wish;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /wishes`. `content` is kept loosely typed so a missing or
/// non-string value can be answered with the board's own message.
#[derive(Debug, Deserialize)]
pub struct CreateWishRequest {
    #[serde(default)]
    pub content: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct WishesResponse {
    pub wishes: Vec<Wish>,
}

#[derive(Debug, Serialize)]
pub struct WishResponse {
    pub success: bool,
    pub wish: Wish,
}

impl WishResponse {
    pub fn new(wish: Wish) -> Self {
        WishResponse {
            success: true,
            wish,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

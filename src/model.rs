use serde::{Deserialize, Serialize};

/// A single entry on the board.
///
/// `content` is stored already entity-escaped; `created_at` is local board
/// time without a zone designator (`YYYY-MM-DD HH:MM:SS`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub id: i64,
    pub content: String,
    pub likes: i64,
    pub created_at: String,
}

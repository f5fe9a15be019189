//! Domain types for the message board.

use serde::{Deserialize, Serialize};

/// Maximum description length enforced by the storage layer.
///
/// The column is declared `VARCHAR(200)` with a CHECK constraint; nothing
/// above the repository enforces this, so an oversized description fails
/// at the store, not at the API.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Identifier of a persisted [`Message`], assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

impl MessageId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message left on the board.
///
/// `id` is `None` until the record has been persisted; the repository's
/// `save` returns the stored copy with the generated identifier filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Option<MessageId>,
    pub description: String,
}

impl Message {
    /// Build an unsaved message from a description.
    ///
    /// The description is taken as-is: no trimming, no validation, empty
    /// strings included.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
        }
    }
}

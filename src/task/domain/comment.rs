//! Comments appended to a task's discussion thread.

use crate::actor::domain::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single immutable comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author_id: ActorId,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Comment {
    /// Reconstructs a comment, typically from persisted storage.
    ///
    /// New comments are created through [`super::Task::add_comment`], which
    /// validates the text.
    #[must_use]
    pub const fn new(author_id: ActorId, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            author_id,
            text,
            timestamp,
        }
    }

    /// Returns the author of the comment.
    #[must_use]
    pub const fn author_id(&self) -> &ActorId {
        &self.author_id
    }

    /// Returns the comment text as written.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the comment was appended.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

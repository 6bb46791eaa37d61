use serde::{Deserialize, Serialize};

/// A short user-authored text entry.
///
/// Serialized with an ISO-8601 `timestamp` string so the stored list can be
/// read back by any client of the same local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

impl Post {
    /// Length of the text in characters, as used by [`crate::stats::PostStats`].
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

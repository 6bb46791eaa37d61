use serde::Serialize;

use crate::models::post::Post;

/// Derived figures over the post list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostStats {
    pub count: usize,
    /// Mean text length in characters; `0.0` for an empty list.
    pub average_length: f64,
}

impl PostStats {
    pub fn compute(posts: &[Post]) -> Self {
        let count = posts.len();
        if count == 0 {
            return Self {
                count,
                average_length: 0.0,
            };
        }

        let total: usize = posts.iter().map(Post::char_len).sum();
        Self {
            count,
            average_length: total as f64 / count as f64,
        }
    }
}

use std::cell::OnceCell;

use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::models::post::Post;
use crate::repository::PostRepository;
use crate::stats::PostStats;

type Clock = Box<dyn Fn() -> jiff::Timestamp>;

/// In-memory ordered post list, mirrored to a [`PostRepository`].
///
/// The list is the single source of truth. Every add or delete is followed by
/// a full-list write through the repository.
///
/// Ids come from a counter seeded past the highest stored id, so a deleted
/// post's id is never handed to a new post while the old one is still
/// listed. Once `u64::MAX` has been handed out the store refuses new posts.
pub struct PostStore<R> {
    repo: R,
    posts: Vec<Post>,
    next_id: Option<u64>,
    clock: Clock,
    stats: OnceCell<PostStats>,
}

impl<R: PostRepository> PostStore<R> {
    /// Read the persisted list once and build a store around it.
    pub fn load(repo: R) -> Self {
        let posts = repo.load();
        let next_id = posts
            .iter()
            .try_fold(0u64, |next, p| p.id.checked_add(1).map(|n| next.max(n)));
        if next_id.is_none() {
            warn!(count = posts.len(), "stored post ids exhausted, new posts will be refused");
        }
        debug!(count = posts.len(), next_id = ?next_id, "post store loaded");

        Self {
            repo,
            posts,
            next_id,
            clock: Box::new(jiff::Timestamp::now),
            stats: OnceCell::new(),
        }
    }

    /// Replace the timestamp source used for new posts.
    pub fn with_clock(mut self, clock: impl Fn() -> jiff::Timestamp + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Append a post. Blank text is ignored and returns `Ok(None)`.
    pub fn add_post(&mut self, text: &str) -> Result<Option<Post>, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank post");
            return Ok(None);
        }

        let Some(id) = self.next_id else {
            warn!("post ids exhausted");
            return Err(CoreError::IdsExhausted);
        };
        let post = Post {
            id,
            text: text.to_string(),
            timestamp: (self.clock)(),
        };
        self.next_id = id.checked_add(1);
        self.posts.push(post.clone());
        self.stats.take();

        info!(id = post.id, "post added");
        self.persist()?;
        Ok(Some(post))
    }

    /// Remove the post with `id`. Returns whether anything was removed; an
    /// unknown id is not an error.
    pub fn delete_post(&mut self, id: u64) -> Result<bool, CoreError> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = self.posts.len() != before;
        if removed {
            self.stats.take();
            info!(id, "post deleted");
        } else {
            debug!(id, "delete of unknown post");
        }

        self.persist()?;
        Ok(removed)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The most recently added post still in the list.
    pub fn latest(&self) -> Option<&Post> {
        self.posts.last()
    }

    /// Count and mean length, computed once per list revision.
    pub fn stats(&self) -> PostStats {
        *self.stats.get_or_init(|| {
            debug!(count = self.posts.len(), "recomputing post stats");
            PostStats::compute(&self.posts)
        })
    }

    fn persist(&self) -> Result<(), CoreError> {
        self.repo.save(&self.posts)
    }
}

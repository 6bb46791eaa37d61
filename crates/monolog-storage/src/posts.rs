use monolog_core::error::CoreError;
use monolog_core::models::post::Post;
use monolog_core::repository::PostRepository;
use monolog_core::storage_keys;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// [`PostRepository`] that keeps the whole list as one JSON value under
/// [`storage_keys::POSTS`].
#[derive(Debug)]
pub struct LocalPostRepository<S> {
    store: S,
}

impl<S: KeyValueStore> LocalPostRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read and parse the stored list, surfacing every failure.
    pub fn try_load(&self) -> Result<Option<Vec<Post>>, StorageError> {
        let Some(raw) = self.store.get_item(storage_keys::POSTS)? else {
            return Ok(None);
        };
        let posts: Vec<Post> = serde_json::from_str(&raw)?;
        Ok(Some(posts))
    }
}

impl<S: KeyValueStore> PostRepository for LocalPostRepository<S> {
    fn load(&self) -> Vec<Post> {
        match self.try_load() {
            Ok(Some(posts)) => {
                tracing::debug!(count = posts.len(), "posts loaded from local storage");
                posts
            }
            Ok(None) => {
                tracing::debug!("no stored posts, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored posts unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, posts: &[Post]) -> Result<(), CoreError> {
        let json = serde_json::to_string(posts).map_err(StorageError::from)?;
        self.store.set_item(storage_keys::POSTS, &json)?;
        tracing::debug!(count = posts.len(), "posts saved to local storage");
        Ok(())
    }
}

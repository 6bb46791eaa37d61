use crate::error::CoreError;
use crate::models::post::Post;

/// Persistence seam for the post list.
///
/// The whole list is read once at startup and written back wholesale after
/// every change. Implementations decide the medium.
pub trait PostRepository {
    /// Read the stored list. Missing or unreadable data is an empty list,
    /// never an error.
    fn load(&self) -> Vec<Post>;

    /// Replace the stored list with `posts`.
    fn save(&self, posts: &[Post]) -> Result<(), CoreError>;
}

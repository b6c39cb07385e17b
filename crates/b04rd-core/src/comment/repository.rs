//! Comment repository trait.

use super::model::{Comment, CommentUpdate, NewComment};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for comment operations.
///
/// `list_by_post` returns the flat list the backend stores; nesting is a
/// client-side concern (see [`crate::comment::tree`]).
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Lists all comments on a post as a flat sequence.
    ///
    /// Implementations must map an empty or absent response body to an
    /// empty vector rather than an error.
    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>>;

    /// Fetches a single comment by id.
    async fn get(&self, id: i64) -> Result<Comment>;

    /// Creates a comment (optionally a reply) and returns the stored record.
    async fn create(&self, comment: NewComment) -> Result<Comment>;

    /// Applies a partial update and returns the stored record.
    async fn update(&self, update: CommentUpdate) -> Result<Comment>;

    /// Deletes a comment.
    async fn delete(&self, id: i64) -> Result<()>;
}

//! Post repository trait.
//!
//! Defines the interface for the remote post collaborator. The backend owns
//! the wire format; implementations live in the infrastructure layer.

use super::model::{NewPost, Post, PostUpdate};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for post operations.
///
/// Decouples the application services from the concrete transport
/// (HTTP backend in production, in-memory fakes in tests).
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists posts, newest first.
    ///
    /// # Arguments
    ///
    /// * `limit` / `offset` - pagination window
    /// * `include_archived` - whether archived posts appear in the listing
    async fn list(&self, limit: u32, offset: u32, include_archived: bool) -> Result<Vec<Post>>;

    /// Fetches a single post by id, comments included.
    async fn get(&self, id: i64) -> Result<Post>;

    /// Lists posts written by the given author session.
    async fn list_by_author(&self, author_id: &str, limit: u32, offset: u32) -> Result<Vec<Post>>;

    /// Creates a new post and returns the stored record.
    async fn create(&self, post: NewPost) -> Result<Post>;

    /// Updates an existing post and returns the stored record.
    async fn update(&self, update: PostUpdate) -> Result<Post>;

    /// Deletes a post. Succeeds if the post is already gone.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Moves a post to the archive.
    async fn archive(&self, id: i64) -> Result<()>;

    /// Restores a post from the archive.
    async fn unarchive(&self, id: i64) -> Result<()>;
}

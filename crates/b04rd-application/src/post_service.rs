//! Post feed and lifecycle service.

use b04rd_core::error::Result;
use b04rd_core::pagination::{offset_for_page, POSTS_PER_PAGE};
use b04rd_core::post::{NewPost, Post, PostRepository, PostUpdate};
use std::sync::Arc;
use tracing::debug;

/// Service for the post feeds and post lifecycle operations.
///
/// Destructive operations (`delete`, `archive`, `unarchive`) are
/// confirmation-gated: the presentation layer must obtain an explicit
/// affirmative confirmation from the user before invoking them, and must
/// surface an `Err` as a blocking notification.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// One page of the main feed (1-based page, archived posts excluded).
    pub async fn feed_page(&self, page: u32) -> Result<Vec<Post>> {
        let offset = offset_for_page(page, POSTS_PER_PAGE);
        self.posts.list(POSTS_PER_PAGE, offset, false).await
    }

    /// One page of the archive feed: listed with archived posts included,
    /// then narrowed to the archived ones.
    pub async fn archive_page(&self, page: u32) -> Result<Vec<Post>> {
        let offset = offset_for_page(page, POSTS_PER_PAGE);
        let posts = self.posts.list(POSTS_PER_PAGE, offset, true).await?;
        Ok(posts.into_iter().filter(|post| post.is_archive).collect())
    }

    /// One page of the visitor's own posts.
    pub async fn my_posts_page(&self, author_id: &str, page: u32) -> Result<Vec<Post>> {
        let offset = offset_for_page(page, POSTS_PER_PAGE);
        self.posts
            .list_by_author(author_id, POSTS_PER_PAGE, offset)
            .await
    }

    /// Fetches a single post, comments included.
    pub async fn get(&self, id: i64) -> Result<Post> {
        self.posts.get(id).await
    }

    /// Creates a new post.
    pub async fn create(&self, post: NewPost) -> Result<Post> {
        debug!(title = %post.title, "creating post");
        self.posts.create(post).await
    }

    /// Updates an existing post.
    pub async fn update(&self, update: PostUpdate) -> Result<Post> {
        self.posts.update(update).await
    }

    /// Deletes a post. Confirmation-gated (see type docs).
    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "deleting post");
        self.posts.delete(id).await
    }

    /// Archives a post. Confirmation-gated (see type docs).
    pub async fn archive(&self, id: i64) -> Result<()> {
        debug!(id, "archiving post");
        self.posts.archive(id).await
    }

    /// Unarchives a post. Confirmation-gated (see type docs).
    pub async fn unarchive(&self, id: i64) -> Result<()> {
        debug!(id, "unarchiving post");
        self.posts.unarchive(id).await
    }
}

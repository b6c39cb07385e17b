//! Comment domain model.

use crate::post::ImageUpload;
use serde::{Deserialize, Serialize};

/// A comment on a post.
///
/// The backend returns comments as a flat list; `reply_to_comment_id` links
/// a reply to its parent. `replies` is absent on the wire and only populated
/// by [`crate::comment::tree::build_comment_tree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: i64,
    /// Owning post
    pub post_id: i64,
    pub title: String,
    pub content: String,
    /// Session id of the author
    pub author_id: String,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Parent comment id; `None` marks a root comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_comment_id: Option<i64>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Nested replies, display-side only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Comment>,
}

/// Fields required to create a comment.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    pub image: Option<ImageUpload>,
    /// Set when the comment replies to another comment
    pub reply_to_comment_id: Option<i64>,
}

/// Fields for updating an existing comment. Only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<ImageUpload>,
}

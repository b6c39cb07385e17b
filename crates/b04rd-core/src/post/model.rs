//! Post domain model.

use crate::comment::Comment;
use serde::{Deserialize, Serialize};

/// A board post as returned by the backend.
///
/// `comments` is only populated on single-post fetches; list endpoints
/// return it absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Session id of the author
    pub author_id: String,
    pub author_name: String,
    /// Avatar URL assigned to the author's session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    /// Attached image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the post has been moved to the archive
    #[serde(default)]
    pub is_archive: bool,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// Fields required to create a post.
///
/// The attached image travels as raw bytes with its filename; the backend
/// consumes a multipart form body.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image: Option<ImageUpload>,
    pub expires_at: Option<String>,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
}

/// Fields for updating an existing post.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image: Option<ImageUpload>,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
}

/// An image attachment for a post or comment upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_list_shape() {
        // Listing responses omit comments and optional fields entirely.
        let json = r#"{
            "id": 7,
            "title": "hello",
            "content": "first",
            "author_id": "b2f6c1e0",
            "author_name": "Morty Smith",
            "is_archive": false,
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert!(post.comments.is_none());
        assert!(post.image_url.is_none());
        assert!(!post.is_archive);
    }

    #[test]
    fn deserializes_single_post_with_comments() {
        let json = r#"{
            "id": 7,
            "title": "hello",
            "content": "first",
            "author_id": "b2f6c1e0",
            "author_name": "Morty Smith",
            "author_image": "https://example.test/morty.png",
            "image_url": "https://example.test/cat.jpg",
            "is_archive": true,
            "created_at": "2025-03-01T10:00:00Z",
            "expires_at": "2025-03-08T10:00:00Z",
            "comments": [{
                "id": 1,
                "post_id": 7,
                "title": "re: hello",
                "content": "hi",
                "author_id": "a1",
                "author_name": "Rick",
                "created_at": "2025-03-01T11:00:00Z"
            }]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.is_archive);
        let comments = post.comments.unwrap();
        assert_eq!(comments.len(), 1);
        assert!(comments[0].reply_to_comment_id.is_none());
        assert!(comments[0].replies.is_empty());
    }
}

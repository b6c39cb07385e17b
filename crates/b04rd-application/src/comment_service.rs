//! Comment thread service.
//!
//! Fetches the flat comment list for a post, reconstructs the reply tree,
//! and flattens it for display with the fixed nesting cap.

use b04rd_core::comment::{
    build_comment_tree, Comment, CommentRepository, CommentUpdate, NewComment,
};
use b04rd_core::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Maximum nesting depth the presentation renders. Deeper replies are not
/// displayed and the reply affordance stops one level earlier. A display
/// policy, not a data invariant: the tree itself stays unbounded.
pub const MAX_REPLY_DEPTH: usize = 3;

/// One display row of a flattened comment thread.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRow<'a> {
    pub comment: &'a Comment,
    /// Nesting level, 0 for roots
    pub depth: usize,
    /// Whether the UI should offer a "reply" affordance here
    pub can_reply: bool,
}

/// Service for reading and mutating comment threads.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    /// Fetches a post's comments and reconstructs the reply forest.
    ///
    /// An empty or absent backend response yields an empty forest.
    pub async fn thread_for_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let flat = self.comments.list_by_post(post_id).await?;
        debug!(post_id, count = flat.len(), "fetched comments");
        Ok(build_comment_tree(&flat))
    }

    /// Flattens a reply forest into display rows, depth-first, capped at
    /// `max_depth` levels. `can_reply` turns off on the deepest visible
    /// level, where a reply could no longer be displayed.
    pub fn flatten_thread<'a>(roots: &'a [Comment], max_depth: usize) -> Vec<CommentRow<'a>> {
        let mut rows = Vec::new();
        for root in roots {
            Self::flatten_into(root, 0, max_depth, &mut rows);
        }
        rows
    }

    fn flatten_into<'a>(
        comment: &'a Comment,
        depth: usize,
        max_depth: usize,
        rows: &mut Vec<CommentRow<'a>>,
    ) {
        if depth >= max_depth {
            return;
        }
        rows.push(CommentRow {
            comment,
            depth,
            can_reply: depth + 1 < max_depth,
        });
        for reply in &comment.replies {
            Self::flatten_into(reply, depth + 1, max_depth, rows);
        }
    }

    /// Creates a comment (optionally replying to another).
    pub async fn create(&self, comment: NewComment) -> Result<Comment> {
        debug!(post_id = comment.post_id, reply_to = ?comment.reply_to_comment_id, "creating comment");
        self.comments.create(comment).await
    }

    /// Applies a partial update to a comment.
    pub async fn update(&self, update: CommentUpdate) -> Result<Comment> {
        self.comments.update(update).await
    }

    /// Deletes a comment. The presentation layer must obtain explicit user
    /// confirmation before calling this.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.comments.delete(id).await
    }
}

//! Comment domain: model, remote collaborator trait, and tree builder.

pub mod model;
pub mod repository;
pub mod tree;

pub use model::{Comment, CommentUpdate, NewComment};
pub use repository::CommentRepository;
pub use tree::{build_comment_tree, count_comments};

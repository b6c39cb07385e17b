//! Post domain: model and remote collaborator trait.

pub mod model;
pub mod repository;

pub use model::{ImageUpload, NewPost, Post, PostUpdate};
pub use repository::PostRepository;

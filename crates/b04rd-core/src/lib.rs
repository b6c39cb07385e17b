pub mod character;
pub mod comment;
pub mod error;
pub mod pagination;
pub mod post;
pub mod session;

// Re-export common error type
pub use error::{BoardError, Result};

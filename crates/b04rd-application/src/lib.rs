//! Application services for the b04rd client.
//!
//! Use cases sit between the domain core and the presentation layer:
//! session bootstrap and lifecycle, post feeds, comment threads, and the
//! character gallery. Each service takes its collaborators as injected
//! trait objects; [`client::BoardClient`] wires the production set.

pub mod character_service;
pub mod client;
pub mod comment_service;
pub mod post_service;
pub mod session_service;

pub use character_service::{CharacterService, GalleryPage};
pub use client::BoardClient;
pub use comment_service::{CommentRow, CommentService, MAX_REPLY_DEPTH};
pub use post_service::PostService;
pub use session_service::SessionService;

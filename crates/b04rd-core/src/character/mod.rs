//! Character gallery domain: model and remote collaborator trait.

pub mod model;
pub mod repository;

pub use model::{Character, CharacterLocation, CharacterPage};
pub use repository::CharacterRepository;

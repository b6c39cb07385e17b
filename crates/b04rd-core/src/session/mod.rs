//! Session domain: model, remote collaborator trait, local persistence seams.

pub mod model;
pub mod repository;
pub mod store;

pub use model::{Session, SessionUpdate, SESSION_COOKIE_MAX_AGE_SECS, SESSION_COOKIE_NAME};
pub use repository::SessionRepository;
pub use store::{CookieJar, SessionIdStore};

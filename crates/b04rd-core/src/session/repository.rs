//! Session repository trait (remote collaborator).

use super::model::{Session, SessionUpdate};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for remote session operations.
///
/// The backend owns the session records; the client only ever stores the
/// id locally.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a new session. The server assigns a random display identity;
    /// no input is required.
    async fn create(&self) -> Result<Session>;

    /// Fetches a session by id.
    ///
    /// Fails with a not-found error when the id is unknown or expired.
    async fn get(&self, id: &str) -> Result<Session>;

    /// Applies a partial update and returns the stored record.
    async fn update(&self, id: &str, update: SessionUpdate) -> Result<Session>;

    /// Deletes a session on the backend.
    async fn delete(&self, id: &str) -> Result<()>;
}

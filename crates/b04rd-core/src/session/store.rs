//! Local session persistence collaborators.
//!
//! Two small seams stand between the session service and the places client
//! identity lives: a one-key string store for the persisted session id, and
//! a cookie jar mirroring the id for backend authentication. Infrastructure
//! provides the real implementations; tests use in-memory fakes.

use crate::error::Result;
use async_trait::async_trait;

/// Persisted storage for the current session id.
///
/// Exactly one string key: read at startup, written on session creation,
/// removed on clear.
#[async_trait]
pub trait SessionIdStore: Send + Sync {
    /// Reads the persisted session id, if any.
    async fn load(&self) -> Result<Option<String>>;

    /// Persists the session id, replacing any previous value.
    async fn save(&self, id: &str) -> Result<()>;

    /// Removes the persisted id. Succeeds if nothing was stored.
    async fn clear(&self) -> Result<()>;
}

/// The `session_id` authentication cookie.
///
/// Fixed attributes: path `/`, max-age 86400 seconds, SameSite=Lax.
/// Clearing expires the cookie immediately.
pub trait CookieJar: Send + Sync {
    /// Sets the session cookie to the given id with the fixed attributes.
    fn set_session(&self, id: &str);

    /// Expires the session cookie immediately.
    fn clear_session(&self);

    /// Returns the current cookie value, `None` once expired or cleared.
    fn session_id(&self) -> Option<String>;
}

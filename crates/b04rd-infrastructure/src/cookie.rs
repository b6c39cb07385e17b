//! In-memory session cookie.
//!
//! A headless stand-in for the browser's cookie jar: holds the single
//! `session_id` authentication cookie with its fixed attributes and
//! wall-clock expiry. The HTTP client reads it to build the `Cookie`
//! request header.

use b04rd_core::session::{CookieJar, SESSION_COOKIE_MAX_AGE_SECS, SESSION_COOKIE_NAME};
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory implementation of [`CookieJar`].
///
/// Attributes match the browser client: path `/`, max-age 86400 seconds,
/// SameSite=Lax. Clearing sets an already-expired deadline, the same
/// mechanism a browser uses to delete a cookie.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookie: Mutex<Option<StoredCookie>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the cookie as a `Set-Cookie`-style attribute string.
    ///
    /// Useful for diagnostics and for embedders that bridge to a real
    /// browser environment.
    pub fn attribute_string(id: &str) -> String {
        format!(
            "{SESSION_COOKIE_NAME}={id}; path=/; max-age={SESSION_COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        )
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<StoredCookie>> {
        // A poisoned lock only means a panicked writer; the cookie value
        // itself is always coherent.
        match self.cookie.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn set_session(&self, id: &str) {
        let mut guard = self.lock();
        *guard = Some(StoredCookie {
            value: id.to_string(),
            expires_at: Utc::now() + Duration::seconds(SESSION_COOKIE_MAX_AGE_SECS),
        });
    }

    fn clear_session(&self) {
        let mut guard = self.lock();
        if let Some(cookie) = guard.as_mut() {
            cookie.expires_at = DateTime::<Utc>::UNIX_EPOCH;
        }
    }

    fn session_id(&self) -> Option<String> {
        let guard = self.lock();
        guard
            .as_ref()
            .filter(|cookie| cookie.expires_at > Utc::now())
            .map(|cookie| cookie.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_read_back() {
        let jar = MemoryCookieJar::new();
        assert_eq!(jar.session_id(), None);

        jar.set_session("abc-123");
        assert_eq!(jar.session_id(), Some("abc-123".to_string()));
    }

    #[test]
    fn clearing_expires_immediately() {
        let jar = MemoryCookieJar::new();
        jar.set_session("abc-123");
        jar.clear_session();
        assert_eq!(jar.session_id(), None);
    }

    #[test]
    fn attribute_string_carries_fixed_attributes() {
        assert_eq!(
            MemoryCookieJar::attribute_string("abc-123"),
            "session_id=abc-123; path=/; max-age=86400; SameSite=Lax"
        );
    }
}

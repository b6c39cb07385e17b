//! Session domain model.
//!
//! An ephemeral per-visitor identity issued by the backend. The client
//! persists only the id; every other field is owned by the backend and
//! refreshed from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of the session authentication cookie, in seconds.
pub const SESSION_COOKIE_MAX_AGE_SECS: i64 = 86_400;

/// Name of the authentication cookie mirrored from the session id.
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// A visitor session as issued by the backend.
///
/// The backend assigns a random display identity (name, avatar image,
/// gender, age) on creation; the client treats these as read-mostly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque server-assigned identifier, the only durable client state
    pub id: String,
    pub name: String,
    pub gender: String,
    pub age: String,
    /// Avatar URL
    pub image: String,
    pub created_at: String,
    pub expires_at: String,
}

impl Session {
    /// Whether the session is still valid at `now`.
    ///
    /// An absent or unparseable `expires_at` counts as valid; only an
    /// expiry that parses and lies in the past invalidates the session.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match DateTime::parse_from_rfc3339(&self.expires_at) {
            Ok(expiry) => expiry.with_timezone(&Utc) > now,
            Err(_) => true,
        }
    }

    /// Whether the session is still valid right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

/// A partial session update; only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
}

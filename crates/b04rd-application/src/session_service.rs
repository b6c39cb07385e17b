//! Session bootstrap and lifecycle service.
//!
//! Owns the single authoritative in-memory [`Session`] and coordinates the
//! three injected collaborators: the remote session repository, the local
//! id store, and the authentication cookie jar. Consumers only ever get
//! cloned snapshots; mutations go through the named operations below.
//!
//! Bootstrap resolution:
//!
//! ```text
//! Uninitialized -> Restoring -> { Restored | CreatingNew } -> Ready
//! Ready -> Refreshing -> Ready
//! Ready -> Cleared -> Uninitialized
//! ```
//!
//! Restore and refresh fall back to creating a fresh session on any remote
//! failure. The create path never propagates an error: on failure the
//! in-memory session stays `None` and the next explicit call retries.

use b04rd_core::error::{BoardError, Result};
use b04rd_core::session::{CookieJar, Session, SessionIdStore, SessionRepository, SessionUpdate};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Service managing the visitor session lifecycle.
///
/// Construct one instance at application start and share it by reference;
/// there is no global singleton.
pub struct SessionService {
    /// Remote session collaborator
    sessions: Arc<dyn SessionRepository>,
    /// Local persisted id (one string key)
    store: Arc<dyn SessionIdStore>,
    /// `session_id` authentication cookie mirror
    cookies: Arc<dyn CookieJar>,
    /// The single authoritative in-memory session
    current: RwLock<Option<Session>>,
    /// Serializes bootstrap/create/refresh so rapid repeated triggers
    /// cannot create duplicate remote sessions.
    lifecycle: Mutex<()>,
}

impl SessionService {
    /// Creates a new service with injected collaborators.
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        store: Arc<dyn SessionIdStore>,
        cookies: Arc<dyn CookieJar>,
    ) -> Self {
        Self {
            sessions,
            store,
            cookies,
            current: RwLock::new(None),
            lifecycle: Mutex::new(()),
        }
    }

    /// Establishes or restores the visitor session.
    ///
    /// With a persisted id, tries to restore the matching remote session;
    /// on any failure (expired, unknown, network) falls back to creating a
    /// new one. Never returns an error: a `None` result means the visitor
    /// currently has no identity and identity-gated features stay off until
    /// the next explicit trigger.
    ///
    /// Concurrent calls serialize; a call racing an in-flight bootstrap
    /// awaits it and reuses the installed session.
    pub async fn bootstrap(&self) -> Option<Session> {
        let _guard = self.lifecycle.lock().await;

        if let Some(existing) = self.current.read().await.clone() {
            debug!(session_id = %existing.id, "bootstrap: session already established");
            return Some(existing);
        }

        let persisted = match self.store.load().await {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "bootstrap: failed to read persisted session id");
                None
            }
        };

        if let Some(id) = persisted {
            match self.sessions.get(&id).await {
                Ok(session) => {
                    info!(session_id = %session.id, name = %session.name, "session restored");
                    self.install(session.clone()).await;
                    return Some(session);
                }
                Err(err) => {
                    warn!(session_id = %id, error = %err, "failed to restore session, creating new one");
                }
            }
        }

        self.create_locked().await
    }

    /// Creates a fresh remote session, replacing any current one.
    ///
    /// Serialized with bootstrap and refresh.
    pub async fn create_new_session(&self) -> Option<Session> {
        let _guard = self.lifecycle.lock().await;
        self.create_locked().await
    }

    /// Re-fetches the current session's record from the backend.
    ///
    /// On success the in-memory session is replaced; on failure (or with no
    /// current session) this falls back to creating a new one.
    pub async fn refresh(&self) -> Option<Session> {
        let _guard = self.lifecycle.lock().await;

        let current_id = self.current.read().await.as_ref().map(|s| s.id.clone());
        if let Some(id) = current_id {
            match self.sessions.get(&id).await {
                Ok(session) => {
                    debug!(session_id = %session.id, "session refreshed");
                    self.install(session.clone()).await;
                    return Some(session);
                }
                Err(err) => {
                    warn!(session_id = %id, error = %err, "failed to refresh session, creating new one");
                }
            }
        }

        self.create_locked().await
    }

    /// Applies a partial profile update (name, gender, age).
    ///
    /// Unlike bootstrap, failures surface to the caller so the presentation
    /// layer can show a blocking notification.
    pub async fn update_profile(&self, update: SessionUpdate) -> Result<Session> {
        let id = self
            .current
            .read()
            .await
            .as_ref()
            .map(|s| s.id.clone())
            .ok_or(BoardError::NoSession)?;

        let session = self.sessions.update(&id, update).await?;
        self.install(session.clone()).await;
        Ok(session)
    }

    /// Renames the visitor. Convenience wrapper over [`Self::update_profile`].
    pub async fn rename(&self, name: impl Into<String>) -> Result<Session> {
        self.update_profile(SessionUpdate {
            name: Some(name.into()),
            ..SessionUpdate::default()
        })
        .await
    }

    /// Drops the visitor identity: removes the persisted id, nulls the
    /// in-memory session, and expires the authentication cookie. The next
    /// bootstrap creates a fresh session.
    pub async fn clear(&self) {
        let _guard = self.lifecycle.lock().await;

        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear persisted session id");
        }
        *self.current.write().await = None;
        self.cookies.clear_session();
        info!("session cleared");
    }

    /// Snapshot of the current session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// The current visitor's id, if a session is established.
    pub async fn user_id(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.id.clone())
    }

    /// The current visitor's display name, if a session is established.
    pub async fn user_name(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.name.clone())
    }

    /// Whether a session is established and not past its expiry.
    pub async fn is_session_valid(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(|s| s.is_valid())
    }

    /// Create path: remote create, persist the id, mirror the cookie.
    /// Caller must hold the lifecycle lock.
    async fn create_locked(&self) -> Option<Session> {
        match self.sessions.create().await {
            Ok(session) => {
                if let Err(err) = self.store.save(&session.id).await {
                    // Identity still works for this run; only the next
                    // reload loses it.
                    warn!(error = %err, "failed to persist session id");
                }
                info!(session_id = %session.id, name = %session.name, "new session created");
                self.install(session.clone()).await;
                Some(session)
            }
            Err(err) => {
                warn!(error = %err, "failed to create session");
                *self.current.write().await = None;
                None
            }
        }
    }

    async fn install(&self, session: Session) {
        self.cookies.set_session(&session.id);
        *self.current.write().await = Some(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use b04rd_infrastructure::MemoryCookieJar;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    fn session(id: &str, name: &str) -> Session {
        Session {
            id: id.to_string(),
            name: name.to_string(),
            gender: "unknown".to_string(),
            age: "30".to_string(),
            image: "https://example.test/avatar.png".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            expires_at: "2099-01-01T00:00:00Z".to_string(),
        }
    }

    /// Remote session fake with call counters.
    struct MockSessionRepository {
        create_calls: AtomicUsize,
        get_calls: AtomicUsize,
        /// Session handed out by `create`; `None` simulates remote failure
        create_result: Option<Session>,
        /// Session handed out by `get`; `None` simulates not-found
        get_result: Option<Session>,
    }

    impl MockSessionRepository {
        fn new(create_result: Option<Session>, get_result: Option<Session>) -> Self {
            Self {
                create_calls: AtomicUsize::new(0),
                get_calls: AtomicUsize::new(0),
                create_result,
                get_result,
            }
        }

        fn create_count(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        fn get_count(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn create(&self) -> Result<Session> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            // Yield so overlapping bootstrap calls actually interleave.
            tokio::task::yield_now().await;
            self.create_result
                .clone()
                .ok_or_else(|| BoardError::Network("connection refused".into()))
        }

        async fn get(&self, id: &str) -> Result<Session> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.get_result
                .clone()
                .ok_or_else(|| BoardError::not_found("session", id))
        }

        async fn update(&self, id: &str, update: SessionUpdate) -> Result<Session> {
            let mut updated = self
                .get_result
                .clone()
                .ok_or_else(|| BoardError::not_found("session", id))?;
            if let Some(name) = update.name {
                updated.name = name;
            }
            if let Some(gender) = update.gender {
                updated.gender = gender;
            }
            if let Some(age) = update.age {
                updated.age = age;
            }
            Ok(updated)
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    /// In-memory one-key store.
    #[derive(Default)]
    struct MemoryIdStore {
        id: StdMutex<Option<String>>,
    }

    impl MemoryIdStore {
        fn with_id(id: &str) -> Self {
            Self {
                id: StdMutex::new(Some(id.to_string())),
            }
        }

        fn stored(&self) -> Option<String> {
            self.id.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionIdStore for MemoryIdStore {
        async fn load(&self) -> Result<Option<String>> {
            Ok(self.id.lock().unwrap().clone())
        }

        async fn save(&self, id: &str) -> Result<()> {
            *self.id.lock().unwrap() = Some(id.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.id.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service(
        repo: Arc<MockSessionRepository>,
        store: Arc<MemoryIdStore>,
        jar: Arc<MemoryCookieJar>,
    ) -> SessionService {
        SessionService::new(repo, store, jar)
    }

    #[tokio::test]
    async fn bootstrap_without_persisted_id_creates_once_and_persists() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-new", "Birdperson")),
            None,
        ));
        let store = Arc::new(MemoryIdStore::default());
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());

        let installed = svc.bootstrap().await.unwrap();

        assert_eq!(installed.id, "s-new");
        assert_eq!(repo.create_count(), 1);
        assert_eq!(repo.get_count(), 0);
        assert_eq!(store.stored(), Some("s-new".to_string()));
        assert_eq!(jar.session_id(), Some("s-new".to_string()));
    }

    #[tokio::test]
    async fn bootstrap_restores_persisted_session_without_creating() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-new", "fresh")),
            Some(session("s-old", "Squanchy")),
        ));
        let store = Arc::new(MemoryIdStore::with_id("s-old"));
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());

        let installed = svc.bootstrap().await.unwrap();

        assert_eq!(installed.id, "s-old");
        assert_eq!(repo.create_count(), 0);
        assert_eq!(repo.get_count(), 1);
        assert_eq!(jar.session_id(), Some("s-old".to_string()));
    }

    #[tokio::test]
    async fn bootstrap_falls_back_to_create_when_restore_fails() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-new", "fresh")),
            None, // persisted id is unknown to the backend
        ));
        let store = Arc::new(MemoryIdStore::with_id("s-expired"));
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());

        let installed = svc.bootstrap().await.unwrap();

        assert_eq!(installed.id, "s-new");
        assert_eq!(repo.get_count(), 1);
        assert_eq!(repo.create_count(), 1);
        assert_eq!(store.stored(), Some("s-new".to_string()));
    }

    #[tokio::test]
    async fn create_failure_leaves_no_session_and_stays_retryable() {
        let repo = Arc::new(MockSessionRepository::new(None, None));
        let store = Arc::new(MemoryIdStore::default());
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());

        assert!(svc.bootstrap().await.is_none());
        assert!(svc.current().await.is_none());
        assert_eq!(store.stored(), None);

        // The next explicit trigger retries from scratch.
        assert!(svc.bootstrap().await.is_none());
        assert_eq!(repo.create_count(), 2);
    }

    #[tokio::test]
    async fn refresh_failure_falls_back_to_create() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-2", "fresh")),
            Some(session("s-1", "Gearhead")),
        ));
        let store = Arc::new(MemoryIdStore::with_id("s-1"));
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());
        svc.bootstrap().await.unwrap();

        // Simulate the record disappearing server-side.
        let failing = Arc::new(MockSessionRepository::new(
            Some(session("s-2", "fresh")),
            None,
        ));
        let svc = SessionService::new(failing.clone(), store.clone(), jar.clone());
        // Seed the in-memory session as if bootstrap had succeeded earlier.
        svc.install(session("s-1", "Gearhead")).await;

        let refreshed = svc.refresh().await.unwrap();
        assert_eq!(refreshed.id, "s-2");
        assert_eq!(failing.get_count(), 1);
        assert_eq!(failing.create_count(), 1);
        assert_eq!(store.stored(), Some("s-2".to_string()));
    }

    #[tokio::test]
    async fn clear_drops_identity_everywhere() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-1", "Morty")),
            None,
        ));
        let store = Arc::new(MemoryIdStore::default());
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());
        svc.bootstrap().await.unwrap();

        svc.clear().await;

        assert!(svc.current().await.is_none());
        assert_eq!(store.stored(), None);
        assert_eq!(jar.session_id(), None);
        assert!(!svc.is_session_valid().await);
    }

    #[tokio::test]
    async fn concurrent_bootstraps_create_exactly_one_session() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-1", "Morty")),
            None,
        ));
        let store = Arc::new(MemoryIdStore::default());
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo.clone(), store.clone(), jar.clone());

        let (a, b) = futures::join!(svc.bootstrap(), svc.bootstrap());

        assert_eq!(a.unwrap().id, "s-1");
        assert_eq!(b.unwrap().id, "s-1");
        assert_eq!(repo.create_count(), 1);
    }

    #[tokio::test]
    async fn update_profile_requires_a_session() {
        let repo = Arc::new(MockSessionRepository::new(None, None));
        let store = Arc::new(MemoryIdStore::default());
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo, store, jar);

        let err = svc.rename("Pickle").await.unwrap_err();
        assert!(matches!(err, BoardError::NoSession));
    }

    #[tokio::test]
    async fn rename_replaces_the_snapshot() {
        let repo = Arc::new(MockSessionRepository::new(
            Some(session("s-1", "Morty")),
            Some(session("s-1", "Morty")),
        ));
        let store = Arc::new(MemoryIdStore::default());
        let jar = Arc::new(MemoryCookieJar::new());
        let svc = service(repo, store, jar);
        svc.bootstrap().await.unwrap();

        let renamed = svc.rename("Evil Morty").await.unwrap();
        assert_eq!(renamed.name, "Evil Morty");
        assert_eq!(svc.user_name().await, Some("Evil Morty".to_string()));
    }
}

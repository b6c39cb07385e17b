//! Wired client facade.
//!
//! Bundles the production collaborator set (HTTP clients, file id store,
//! in-memory cookie jar) behind the four services. Construct one at
//! application start and hand it to the presentation layer.

use b04rd_core::error::Result;
use b04rd_infrastructure::{
    ApiConfig, FileSessionIdStore, HttpBoardApi, HttpCharacterApi, MemoryCookieJar,
};
use std::sync::Arc;

use crate::character_service::CharacterService;
use crate::comment_service::CommentService;
use crate::post_service::PostService;
use crate::session_service::SessionService;

/// All services wired against the real backend and character API.
pub struct BoardClient {
    pub sessions: SessionService,
    pub posts: PostService,
    pub comments: CommentService,
    pub characters: CharacterService,
}

impl BoardClient {
    /// Wires the client from configuration.
    ///
    /// The backend client is shared across the post, comment, and session
    /// services; the cookie jar it reads is the one the session service
    /// mirrors the id into, so requests authenticate as soon as bootstrap
    /// completes.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let cookies = Arc::new(MemoryCookieJar::new());
        let api = Arc::new(HttpBoardApi::new(config, cookies.clone())?);
        let store = Arc::new(FileSessionIdStore::new()?);
        let character_api = Arc::new(HttpCharacterApi::new(config)?);

        Ok(Self {
            sessions: SessionService::new(api.clone(), store, cookies),
            posts: PostService::new(api.clone()),
            comments: CommentService::new(api),
            characters: CharacterService::new(character_api),
        })
    }

    /// Wires the client from the environment (`B04RD_API_URL`, …).
    pub fn from_env() -> Result<Self> {
        Self::new(&ApiConfig::from_env())
    }
}

//! Character repository trait (external gallery collaborator).

use super::model::CharacterPage;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the decorative character gallery.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Fetches one page of characters (1-based page index, page size owned
    /// by the remote API).
    async fn page(&self, page: u32) -> Result<CharacterPage>;
}

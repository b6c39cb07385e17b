//! Decorative character gallery service.
//!
//! The home screen shows six characters per page, but the remote character
//! API pages by twenty. This service re-pages client-side: a gallery page
//! maps to an offset into the API's listing, and a six-item window can
//! straddle two adjacent API pages.

use b04rd_core::character::{Character, CharacterRepository};
use b04rd_core::error::Result;
use b04rd_core::pagination::{offset_for_page, total_pages, CHARACTERS_PER_PAGE};
use std::sync::Arc;
use tracing::debug;

/// Page size of the remote character API listing.
const API_PAGE_SIZE: u32 = 20;

/// One gallery page plus the page count for the pagination control.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPage {
    pub characters: Vec<Character>,
    /// 1-based page number this slice represents
    pub page: u32,
    /// Total gallery pages at six characters per page
    pub total_pages: u32,
}

/// Service for the character gallery.
pub struct CharacterService {
    characters: Arc<dyn CharacterRepository>,
}

impl CharacterService {
    pub fn new(characters: Arc<dyn CharacterRepository>) -> Self {
        Self { characters }
    }

    /// Fetches one six-character gallery page (1-based).
    ///
    /// Fetches the covering API page, and the following one when the
    /// window straddles a boundary. Past the end of the listing the page
    /// comes back empty rather than erroring.
    pub async fn gallery_page(&self, page: u32) -> Result<GalleryPage> {
        let offset = offset_for_page(page, CHARACTERS_PER_PAGE);
        let api_page = offset / API_PAGE_SIZE + 1;
        let start_within = (offset % API_PAGE_SIZE) as usize;

        let first = self.characters.page(api_page).await?;
        let total = first.total;
        let mut window: Vec<Character> = first
            .characters
            .into_iter()
            .skip(start_within)
            .take(CHARACTERS_PER_PAGE as usize)
            .collect();

        let missing = CHARACTERS_PER_PAGE as usize - window.len();
        if missing > 0 && offset + CHARACTERS_PER_PAGE > api_page * API_PAGE_SIZE {
            let next = self.characters.page(api_page + 1).await?;
            window.extend(next.characters.into_iter().take(missing));
        }

        debug!(page, count = window.len(), "gallery page assembled");
        Ok(GalleryPage {
            characters: window,
            page,
            total_pages: total_pages(total, CHARACTERS_PER_PAGE),
        })
    }
}

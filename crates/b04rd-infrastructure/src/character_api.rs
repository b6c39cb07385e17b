//! HTTP client for the external character API.
//!
//! The gallery is decorative and read-only; only the paged listing endpoint
//! is consumed.

use async_trait::async_trait;
use b04rd_core::character::{Character, CharacterPage, CharacterRepository};
use b04rd_core::error::{BoardError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::ApiConfig;

/// Client for the character API's paged listing.
pub struct HttpCharacterApi {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PagedResponse {
    info: PageInfo,
    results: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    count: u32,
}

impl HttpCharacterApi {
    /// Creates a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| BoardError::config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.character_api_url.clone(),
        })
    }
}

#[async_trait]
impl CharacterRepository for HttpCharacterApi {
    async fn page(&self, page: u32) -> Result<CharacterPage> {
        let url = format!("{}/character/", self.base_url);
        let response = self
            .client
            .get(url)
            .query(&[("page", page.to_string())])
            .send()
            .await
            .map_err(BoardError::from)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The API 404s past the last page; treat it as an empty page.
            return Ok(CharacterPage {
                characters: Vec::new(),
                total: 0,
            });
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(BoardError::http(status.as_u16(), body));
        }

        let paged: PagedResponse = response.json().await.map_err(BoardError::from)?;
        Ok(CharacterPage {
            characters: paged.results,
            total: paged.info.count,
        })
    }
}

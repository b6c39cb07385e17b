//! Character gallery domain model.
//!
//! Decorative records from the external character API shown on the home
//! page. The client never writes these.

use serde::{Deserialize, Serialize};

/// A character record from the external character API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: CharacterLocation,
    pub location: CharacterLocation,
    /// Portrait image URL
    pub image: String,
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

/// A named location reference on a character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterLocation {
    pub name: String,
    pub url: String,
}

/// One page of the character listing plus the overall count.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterPage {
    pub characters: Vec<Character>,
    /// Total characters across all pages, as reported by the API
    pub total: u32,
}

//! Pictogram metadata and the catalog seam.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Keyword of a pictogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

/// The part of ARASAAC pictogram metadata we rely on.
/// Other fields of the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictogram {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub synsets: Vec<String>,
}

impl Pictogram {
    /// Keywords and their plurals, in payload order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .flat_map(|k| std::iter::once(k.keyword.as_str()).chain(k.plural.as_deref()))
    }

    /// First keyword, if any.
    pub fn first_keyword(&self) -> Option<&str> {
        self.keywords.first().map(|k| k.keyword.as_str())
    }

    pub fn has_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k.keyword == word)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source of pictogram metadata and images.
///
/// [super::ArasaacClient] implements it over HTTP.
pub trait PictoCatalog {
    /// Raw JSON metadata of pictogram `id`.
    fn pictogram_json(&self, id: u64) -> Result<String, Error>;

    /// Pictograms matching `word`.
    fn search(&self, word: &str) -> Result<Vec<Pictogram>, Error>;

    /// Raw JSON array of every pictogram in the catalog.
    fn all_json(&self) -> Result<String, Error>;

    /// Save the image of pictogram `id` at `dst`.
    fn download_image(&self, id: u64, dst: &Path) -> Result<(), Error>;

    fn pictogram(&self, id: u64) -> Result<Pictogram, Error> {
        Pictogram::from_json(&self.pictogram_json(id)?)
    }

    fn synsets(&self, id: u64) -> Result<Vec<String>, Error> {
        Ok(self.pictogram(id)?.synsets)
    }
}

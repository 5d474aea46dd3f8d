//! iTunes Search API client
//!
//! Enrichment only: album name, artwork, release date and a preview clip
//! when the catalog has one. At most one result is ever requested.

use serde::Deserialize;

use super::SongInfo;

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<CatalogResult>,
}

#[derive(Debug, Deserialize)]
struct CatalogResult {
    #[serde(default, rename = "collectionName")]
    collection_name: String,
    #[serde(default, rename = "artworkUrl100")]
    artwork_url: String,
    #[serde(default, rename = "releaseDate")]
    release_date: String,
    #[serde(default, rename = "previewUrl")]
    preview_url: Option<String>,
}

impl From<CatalogResult> for SongInfo {
    fn from(result: CatalogResult) -> Self {
        Self {
            album: result.collection_name,
            artwork_url: result.artwork_url,
            // Catalog timestamps look like "2020-05-01T00:00:00Z"; only the
            // date part is kept.
            release_date: result.release_date.chars().take(10).collect(),
            preview_url: result.preview_url,
        }
    }
}

/// iTunes Search API client
#[derive(Debug, Clone)]
pub struct ItunesClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    const DEFAULT_BASE_URL: &'static str = "https://itunes.apple.com";

    /// Create a new iTunes search client
    pub fn new() -> Self {
        Self {
            client: super::http_client(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: super::http_client(),
            base_url: base_url.into(),
        }
    }

    /// Search the song catalog for `"artist song"`.
    ///
    /// Returns `None` when the catalog has no match.
    pub async fn search_song(&self, phrase: &str) -> anyhow::Result<Option<SongInfo>> {
        let url = format!(
            "{}/search?term={}&entity=song&limit=1",
            self.base_url,
            urlencoding::encode(phrase)
        );

        let body: SearchResponse = self.client.get(&url).send().await?.json().await?;

        Ok(body.results.into_iter().next().map(SongInfo::from))
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

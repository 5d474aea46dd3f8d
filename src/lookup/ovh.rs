//! lyrics.ovh API client
//!
//! Free lyrics-by-artist-and-title endpoint, no auth. Misses come back as a
//! JSON error body on a 404, not as an empty success, so the body is parsed
//! without checking the status first.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OvhResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// lyrics.ovh API client
#[derive(Debug, Clone)]
pub struct OvhClient {
    client: reqwest::Client,
    base_url: String,
}

impl OvhClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.lyrics.ovh";

    /// Create a new lyrics.ovh client
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

    /// Fetch lyrics text for an artist/title pair.
    ///
    /// Returns `None` when the service has no entry (or an empty one) for
    /// the pair. The upstream route takes the raw values in the path.
    pub async fn fetch_lyrics(&self, artist: &str, song: &str) -> anyhow::Result<Option<String>> {
        let url = format!("{}/v1/{}/{}", self.base_url, artist, song);

        let body: OvhResponse = self.client.get(&url).send().await?.json().await?;

        Ok(body.lyrics.filter(|text| !text.is_empty()))
    }
}

impl Default for OvhClient {
    fn default() -> Self {
        Self::new()
    }
}

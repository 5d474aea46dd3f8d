//! Genius search API client
//!
//! Consulted only when the primary source has no text. The search endpoint
//! needs an API token (https://genius.com/api-clients); without one
//! configured the client issues no request and reports no hits, so a
//! tokenless install degrades to "not found" rather than erroring.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    response: SearchPayload,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Default, Deserialize)]
struct Hit {
    #[serde(default)]
    result: HitResult,
}

#[derive(Debug, Default, Deserialize)]
struct HitResult {
    #[serde(default)]
    path: Option<String>,
}

/// Genius search API client
#[derive(Debug, Clone)]
pub struct GeniusClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GeniusClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.genius.com";

    /// Song pages always live on the public site, regardless of which host
    /// answered the search.
    const SONG_PAGE_BASE: &'static str = "https://genius.com";

    /// Create a new Genius client. `token` comes from config, never from
    /// a source constant.
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: super::http_client(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            token,
        }
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: super::http_client(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Search for `"artist song"` and return the page URL of the first hit.
    ///
    /// Returns `None` when the search produced no usable hit. Auth failures
    /// surface as a JSON body without `hits`, which also lands here.
    pub async fn search_first_hit(&self, phrase: &str) -> anyhow::Result<Option<String>> {
        let Some(token) = self.token.as_deref() else {
            return Ok(None);
        };

        let url = format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(phrase)
        );

        let body: SearchResponse = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?
            .json()
            .await?;

        let path = body
            .response
            .hits
            .into_iter()
            .next()
            .and_then(|hit| hit.result.path)
            .filter(|path| !path.is_empty());

        Ok(path.map(|path| format!("{}{}", Self::SONG_PAGE_BASE, path)))
    }
}

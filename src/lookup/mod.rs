//! Lyrics lookup pipeline
//!
//! Resolves an (artist, song) pair against three services in sequence:
//! - lyrics.ovh for the lyrics text itself
//! - Genius search as a fallback link source when no text is available
//! - the iTunes catalog for album metadata and a preview clip
//!
//! The fallback runs only on a primary miss; enrichment always runs. A
//! failure in any stage collapses the whole lookup into a single generic
//! error and drops any partial result.

pub mod genius;
pub mod itunes;
pub mod ovh;

use genius::GeniusClient;
use itunes::ItunesClient;
use ovh::OvhClient;
use serde::Serialize;

/// Shown when both lyrics sources came up empty.
pub const NOT_FOUND_MESSAGE: &str = "Lyrics not found. Please try another song.";

/// Shown for any transport or parse failure, whichever stage it hit.
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("verso/0.1.0 (https://github.com/verso)")
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("failed to create reqwest client")
}

/// A validated artist/song pair.
///
/// Construction fails on blank input, so a lookup is never issued with an
/// empty field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    artist: String,
    song: String,
}

impl LookupQuery {
    pub fn new(artist: &str, song: &str) -> Option<Self> {
        let artist = artist.trim();
        let song = song.trim();
        if artist.is_empty() || song.is_empty() {
            return None;
        }
        Some(Self {
            artist: artist.to_string(),
            song: song.to_string(),
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn song(&self) -> &str {
        &self.song
    }

    /// Combined `"artist song"` phrase used by both search services.
    pub fn phrase(&self) -> String {
        format!("{} {}", self.artist, self.song)
    }
}

/// Outcome of a lookup. Exactly one variant at a time; the UI branches on
/// the tag, never on the shape of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LyricsResult {
    /// Plain lyrics text from the primary service.
    Found { text: String },
    /// No text available; the fallback search produced a page to open
    /// instead.
    ExternalLink { url: String },
    /// Both sources exhausted.
    NotFound,
    /// A request failed mid-lookup.
    Error { message: String },
}

impl LyricsResult {
    /// Whether the save-to-file action applies. Only real text can be
    /// written; links and misses have nothing to save.
    pub fn offers_download(&self) -> bool {
        matches!(self, LyricsResult::Found { .. })
    }
}

/// Catalog metadata attached to a lookup when the song exists in iTunes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongInfo {
    pub album: String,
    pub artwork_url: String,
    /// Date-only prefix of the catalog timestamp (YYYY-MM-DD).
    pub release_date: String,
    pub preview_url: Option<String>,
}

/// Everything one lookup produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub lyrics: LyricsResult,
    pub song_info: Option<SongInfo>,
}

/// The three stage clients behind one entry point.
#[derive(Debug, Clone)]
pub struct Resolver {
    ovh: OvhClient,
    genius: GeniusClient,
    itunes: ItunesClient,
}

impl Resolver {
    pub fn new(genius_token: Option<String>) -> Self {
        Self {
            ovh: OvhClient::new(),
            genius: GeniusClient::new(genius_token),
            itunes: ItunesClient::new(),
        }
    }

    /// Run the full lookup chain: primary text, link fallback, catalog
    /// enrichment.
    ///
    /// Never returns `Err`: stage failures are isolated per stage below,
    /// but any failure resolves the whole lookup to `LyricsResult::Error`
    /// with no metadata, so callers never see a partial result.
    pub async fn resolve(&self, query: &LookupQuery) -> Resolution {
        tracing::debug!(artist = query.artist(), song = query.song(), "lookup start");
        match self.resolve_stages(query).await {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::warn!("lookup failed: {e:#}");
                Resolution {
                    lyrics: LyricsResult::Error {
                        message: ERROR_MESSAGE.to_string(),
                    },
                    song_info: None,
                }
            }
        }
    }

    async fn resolve_stages(&self, query: &LookupQuery) -> anyhow::Result<Resolution> {
        let lyrics = match self.ovh.fetch_lyrics(query.artist(), query.song()).await? {
            Some(text) => LyricsResult::Found { text },
            None => match self.genius.search_first_hit(&query.phrase()).await? {
                Some(url) => LyricsResult::ExternalLink { url },
                None => LyricsResult::NotFound,
            },
        };

        // Enrichment runs whether or not any lyrics turned up.
        let song_info = self.itunes.search_song(&query.phrase()).await?;

        Ok(Resolution { lyrics, song_info })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct StubRoute {
        prefix: &'static str,
        status: u16,
        body: String,
        hits: Arc<AtomicUsize>,
    }

    /// Minimal HTTP stub standing in for the three upstream services:
    /// serves one canned body per path prefix and counts hits.
    async fn spawn_stub(
        routes: Vec<(&'static str, u16, &str)>,
    ) -> (String, Vec<Arc<AtomicUsize>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let routes: Vec<StubRoute> = routes
            .into_iter()
            .map(|(prefix, status, body)| StubRoute {
                prefix,
                status,
                body: body.to_string(),
                hits: Arc::new(AtomicUsize::new(0)),
            })
            .collect();
        let counters: Vec<_> = routes.iter().map(|r| Arc::clone(&r.hits)).collect();
        let routes = Arc::new(routes);

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let mut read = 0;
                    // GET requests have no body; read until the head ends.
                    loop {
                        match socket.read(&mut buf[read..]).await {
                            Ok(0) => break,
                            Ok(n) => {
                                read += n;
                                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                    break;
                                }
                                if read == buf.len() {
                                    break;
                                }
                            }
                            Err(_) => return,
                        }
                    }

                    let head = String::from_utf8_lossy(&buf[..read]).to_string();
                    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();

                    let (status, body) = match routes.iter().find(|r| path.starts_with(r.prefix)) {
                        Some(route) => {
                            route.hits.fetch_add(1, Ordering::SeqCst);
                            (route.status, route.body.clone())
                        }
                        None => (404, "{}".to_string()),
                    };

                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        (format!("http://{}", addr), counters)
    }

    fn resolver_at(base: &str, token: Option<&str>) -> Resolver {
        Resolver {
            ovh: OvhClient::with_base_url(base.to_string()),
            genius: GeniusClient::with_base_url(
                format!("{base}/genius"),
                token.map(|t| t.to_string()),
            ),
            itunes: ItunesClient::with_base_url(format!("{base}/itunes")),
        }
    }

    fn query() -> LookupQuery {
        LookupQuery::new("Artist", "Song").unwrap()
    }

    const NO_HITS: &str = r#"{"response":{"hits":[]}}"#;
    const NO_RESULTS: &str = r#"{"results":[]}"#;

    #[test]
    fn test_query_guard_rejects_blank_fields() {
        assert!(LookupQuery::new("", "Song").is_none());
        assert!(LookupQuery::new("Artist", "").is_none());
        assert!(LookupQuery::new("   ", "Song").is_none());
        assert!(LookupQuery::new("", "").is_none());

        let q = LookupQuery::new(" Artist ", " Song ").unwrap();
        assert_eq!(q.artist(), "Artist");
        assert_eq!(q.song(), "Song");
        assert_eq!(q.phrase(), "Artist Song");
    }

    #[test]
    fn test_offers_download_only_for_found() {
        assert!(LyricsResult::Found { text: "la la".into() }.offers_download());
        assert!(!LyricsResult::ExternalLink { url: "u".into() }.offers_download());
        assert!(!LyricsResult::NotFound.offers_download());
        assert!(
            !LyricsResult::Error { message: "m".into() }.offers_download()
        );
    }

    #[tokio::test]
    async fn test_primary_hit_skips_fallback() {
        let (base, counters) = spawn_stub(vec![
            ("/v1/", 200, r#"{"lyrics":"Hello\nWorld"}"#),
            ("/genius/search", 200, r#"{"response":{"hits":[{"result":{"path":"/x"}}]}}"#),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(
            resolution.lyrics,
            LyricsResult::Found {
                text: "Hello\nWorld".to_string()
            }
        );
        assert!(resolution.song_info.is_none());
        // The fallback endpoint must never have been contacted.
        assert_eq!(counters[1].load(Ordering::SeqCst), 0);
        assert_eq!(counters[0].load(Ordering::SeqCst), 1);
        assert_eq!(counters[2].load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fallback_hit_yields_external_link() {
        let (base, _) = spawn_stub(vec![
            // lyrics.ovh reports a miss as a JSON error body on a 404.
            ("/v1/", 404, r#"{"error":"No lyrics found"}"#),
            (
                "/genius/search",
                200,
                r#"{"response":{"hits":[{"result":{"path":"/X-lyrics"}}]}}"#,
            ),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(
            resolution.lyrics,
            LyricsResult::ExternalLink {
                url: "https://genius.com/X-lyrics".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_lyrics_field_also_falls_back() {
        let (base, counters) = spawn_stub(vec![
            ("/v1/", 200, r#"{"lyrics":""}"#),
            ("/genius/search", 200, NO_HITS),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(resolution.lyrics, LyricsResult::NotFound);
        assert_eq!(counters[1].load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_hits_yields_not_found() {
        let (base, _) = spawn_stub(vec![
            ("/v1/", 404, r#"{"error":"No lyrics found"}"#),
            ("/genius/search", 200, NO_HITS),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(resolution.lyrics, LyricsResult::NotFound);
        assert!(resolution.song_info.is_none());
    }

    #[tokio::test]
    async fn test_missing_token_skips_fallback_entirely() {
        let (base, counters) = spawn_stub(vec![
            ("/v1/", 404, r#"{"error":"No lyrics found"}"#),
            ("/genius/search", 200, r#"{"response":{"hits":[{"result":{"path":"/x"}}]}}"#),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, None).resolve(&query()).await;

        assert_eq!(resolution.lyrics, LyricsResult::NotFound);
        assert_eq!(counters[1].load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enrichment_populates_song_info() {
        let (base, _) = spawn_stub(vec![
            ("/v1/", 200, r#"{"lyrics":"text"}"#),
            ("/genius/search", 200, NO_HITS),
            (
                "/itunes/search",
                200,
                r#"{"results":[{"collectionName":"Album","artworkUrl100":"a.jpg","releaseDate":"2020-05-01T00:00:00Z","previewUrl":"p.mp3"}]}"#,
            ),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(
            resolution.song_info,
            Some(SongInfo {
                album: "Album".to_string(),
                artwork_url: "a.jpg".to_string(),
                release_date: "2020-05-01".to_string(),
                preview_url: Some("p.mp3".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_enrichment_runs_even_when_nothing_found() {
        let (base, counters) = spawn_stub(vec![
            ("/v1/", 404, r#"{"error":"No lyrics found"}"#),
            ("/genius/search", 200, NO_HITS),
            (
                "/itunes/search",
                200,
                r#"{"results":[{"collectionName":"Album","artworkUrl100":"a.jpg","releaseDate":"2020-05-01T00:00:00Z"}]}"#,
            ),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(resolution.lyrics, LyricsResult::NotFound);
        let info = resolution.song_info.expect("song info");
        assert_eq!(info.album, "Album");
        assert!(info.preview_url.is_none());
        assert_eq!(counters[2].load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_primary_parse_failure_collapses_to_error() {
        let (base, counters) = spawn_stub(vec![
            ("/v1/", 500, "<html>broken</html>"),
            ("/genius/search", 200, NO_HITS),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(
            resolution.lyrics,
            LyricsResult::Error {
                message: ERROR_MESSAGE.to_string()
            }
        );
        assert!(resolution.song_info.is_none());
        // The chain stops at the failing stage.
        assert_eq!(counters[1].load(Ordering::SeqCst), 0);
        assert_eq!(counters[2].load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fallback_failure_collapses_to_error() {
        let (base, counters) = spawn_stub(vec![
            ("/v1/", 404, r#"{"error":"No lyrics found"}"#),
            ("/genius/search", 502, "Bad Gateway"),
            ("/itunes/search", 200, NO_RESULTS),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(
            resolution.lyrics,
            LyricsResult::Error {
                message: ERROR_MESSAGE.to_string()
            }
        );
        assert!(resolution.song_info.is_none());
        assert_eq!(counters[2].load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enrichment_failure_discards_found_lyrics() {
        // Flagged source behavior, preserved: lyrics already fetched are
        // dropped when the metadata stage fails.
        let (base, _) = spawn_stub(vec![
            ("/v1/", 200, r#"{"lyrics":"kept until the end"}"#),
            ("/genius/search", 200, NO_HITS),
            ("/itunes/search", 200, "not json at all"),
        ])
        .await;

        let resolution = resolver_at(&base, Some("token")).resolve(&query()).await;

        assert_eq!(
            resolution.lyrics,
            LyricsResult::Error {
                message: ERROR_MESSAGE.to_string()
            }
        );
        assert!(resolution.song_info.is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_collapses_to_error() {
        // Bind-then-drop leaves a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let resolution = resolver_at(&format!("http://{}", addr), Some("token"))
            .resolve(&query())
            .await;

        assert_eq!(
            resolution.lyrics,
            LyricsResult::Error {
                message: ERROR_MESSAGE.to_string()
            }
        );
        assert!(resolution.song_info.is_none());
    }

    #[tokio::test]
    async fn test_repeated_lookup_is_idempotent() {
        let (base, _) = spawn_stub(vec![
            ("/v1/", 200, r#"{"lyrics":"same every time"}"#),
            ("/genius/search", 200, NO_HITS),
            (
                "/itunes/search",
                200,
                r#"{"results":[{"collectionName":"Album","artworkUrl100":"a.jpg","releaseDate":"2020-05-01T00:00:00Z","previewUrl":"p.mp3"}]}"#,
            ),
        ])
        .await;

        let resolver = resolver_at(&base, Some("token"));
        let first = resolver.resolve(&query()).await;
        let second = resolver.resolve(&query()).await;

        assert_eq!(first, second);
    }
}

use crate::lookup::{LookupQuery, LyricsResult, Resolution, SongInfo};

/// Which pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Artist,
    Song,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Artist => Focus::Song,
            Focus::Song => Focus::Results,
            Focus::Results => Focus::Artist,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Artist => Focus::Results,
            Focus::Song => Focus::Artist,
            Focus::Results => Focus::Song,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    // Inputs
    pub artist_input: String,
    pub song_input: String,
    pub focus: Focus,

    // Lookup output. All of it is reset together when a lookup starts and
    // written together when the active lookup finishes.
    pub lyrics: Option<LyricsResult>,
    pub song_info: Option<SongInfo>,
    pub loading: bool,
    /// Artist/song the current result belongs to (used for the save
    /// filename, which must match the query, not the live inputs).
    pub last_query: Option<(String, String)>,
    /// In-flight token: only a completion carrying the latest value may
    /// write its result back.
    pub lookup_seq: u64,
    pub lyrics_scroll: usize,

    pub dark_mode: bool,
    pub show_help: bool,

    pub status: String,
    pub toast: Option<Toast>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            artist_input: String::new(),
            song_input: String::new(),
            focus: Focus::Artist,
            lyrics: None,
            song_info: None,
            loading: false,
            last_query: None,
            lookup_seq: 0,
            lyrics_scroll: 0,
            dark_mode: false,
            show_help: false,
            status: String::new(),
            toast: None,
        }
    }

    /// Clear the previous result and mark a new lookup as the active one.
    /// Returns the sequence number the completion must present.
    pub fn begin_lookup(&mut self, query: &LookupQuery) -> u64 {
        self.lookup_seq += 1;
        self.lyrics = None;
        self.song_info = None;
        self.lyrics_scroll = 0;
        self.loading = true;
        self.last_query = Some((query.artist().to_string(), query.song().to_string()));
        self.lookup_seq
    }

    /// Apply a finished lookup unless a newer one has started since.
    /// Returns whether the resolution was applied.
    pub fn finish_lookup(&mut self, seq: u64, resolution: Resolution) -> bool {
        if seq != self.lookup_seq {
            return false;
        }
        self.lyrics = Some(resolution.lyrics);
        self.song_info = resolution.song_info;
        self.loading = false;
        true
    }

    /// Line count of the active lyrics text, for scroll clamping.
    pub fn lyrics_line_count(&self) -> usize {
        match &self.lyrics {
            Some(LyricsResult::Found { text }) => text.lines().count(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> LookupQuery {
        LookupQuery::new("Artist", "Song").unwrap()
    }

    fn found(text: &str) -> Resolution {
        Resolution {
            lyrics: LyricsResult::Found {
                text: text.to_string(),
            },
            song_info: None,
        }
    }

    #[test]
    fn test_begin_lookup_clears_previous_result() {
        let mut state = AppState::new();
        let seq = state.begin_lookup(&query());
        assert!(state.finish_lookup(seq, found("old")));
        assert!(state.lyrics.is_some());

        state.begin_lookup(&query());
        assert!(state.lyrics.is_none());
        assert!(state.song_info.is_none());
        assert!(state.loading);
        assert_eq!(state.lyrics_scroll, 0);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = AppState::new();
        let first = state.begin_lookup(&query());
        let second = state.begin_lookup(&query());

        // The superseded lookup finishes late; its writes must not land.
        assert!(!state.finish_lookup(first, found("stale")));
        assert!(state.lyrics.is_none());
        assert!(state.loading);

        assert!(state.finish_lookup(second, found("fresh")));
        assert_eq!(
            state.lyrics,
            Some(LyricsResult::Found {
                text: "fresh".to_string()
            })
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_loading_spans_exactly_the_active_lookup() {
        let mut state = AppState::new();
        assert!(!state.loading);

        let seq = state.begin_lookup(&query());
        assert!(state.loading);

        state.finish_lookup(
            seq,
            Resolution {
                lyrics: LyricsResult::Error {
                    message: "oops".to_string(),
                },
                song_info: None,
            },
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Artist.next(), Focus::Song);
        assert_eq!(Focus::Song.next(), Focus::Results);
        assert_eq!(Focus::Results.next(), Focus::Artist);
        assert_eq!(Focus::Artist.prev(), Focus::Results);
    }
}

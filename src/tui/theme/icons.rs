//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Icons {
    // Lookup
    pub music: &'static str,
    pub search: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub lyrics: &'static str,
    pub link: &'static str,
    pub calendar: &'static str,
    pub preview: &'static str,
    pub download: &'static str,

    // Theme
    pub sun: &'static str,
    pub moon: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub loading: &'static str,
    pub info: &'static str,
    pub help: &'static str,

    // Separators
    pub separator: &'static str,
    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            music: "\u{f001}",    // nf-fa-music
            search: "\u{f002}",   // nf-fa-search
            artist: "\u{f007}",   // nf-fa-user
            album: "\u{f51f}",    // nf-md-album
            lyrics: "\u{f15c}",   // nf-fa-file_text_o
            link: "\u{f0c1}",     // nf-fa-link
            calendar: "\u{f073}", // nf-fa-calendar
            preview: "\u{f04b}",  // nf-fa-play
            download: "\u{f019}", // nf-fa-download

            sun: "\u{f185}",  // nf-fa-sun_o
            moon: "\u{f186}", // nf-fa-moon_o

            success: "\u{f00c}", // nf-fa-check
            error: "\u{f00d}",   // nf-fa-times
            loading: "\u{f110}", // nf-fa-spinner
            info: "\u{f05a}",    // nf-fa-info_circle
            help: "\u{f059}",    // nf-fa-question_circle

            separator: "─",
            bullet: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = (tick / 4) as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}

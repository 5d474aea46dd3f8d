//! Theme configuration - dark and light palettes selected per draw

pub mod icons;
pub mod palette;

pub use icons::{Icons, LoadingSpinner};
pub use palette::Palette;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self {
            palette: if dark { Palette::DARK } else { Palette::LIGHT },
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

/// Get the theme for the given mode
pub fn get_theme(dark: bool) -> Theme {
    Theme::new(dark)
}

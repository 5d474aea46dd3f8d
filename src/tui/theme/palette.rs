//! Color palettes - one dark, one light, same roles

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        bg_primary: Color::Rgb(18, 18, 18),      // #121212 near black
        bg_secondary: Color::Rgb(30, 30, 30),    // #1e1e1e
        bg_highlight: Color::Rgb(48, 48, 48),    // #303030
        fg_primary: Color::Rgb(230, 230, 230),   // #e6e6e6
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(97, 175, 239),        // #61afef soft blue
        border: Color::Rgb(64, 64, 64),          // #404040
        success: Color::Rgb(152, 195, 121),      // #98c379
        error: Color::Rgb(224, 108, 117),        // #e06c75
    };

    pub const LIGHT: Self = Self {
        bg_primary: Color::Rgb(250, 250, 250),   // #fafafa
        bg_secondary: Color::Rgb(240, 240, 240), // #f0f0f0
        bg_highlight: Color::Rgb(224, 224, 224), // #e0e0e0
        fg_primary: Color::Rgb(26, 26, 26),      // #1a1a1a
        fg_secondary: Color::Rgb(112, 112, 112), // #707070
        accent: Color::Rgb(3, 102, 214),         // #0366d6
        border: Color::Rgb(192, 192, 192),       // #c0c0c0
        success: Color::Rgb(46, 125, 50),        // #2e7d32
        error: Color::Rgb(192, 57, 43),          // #c0392b
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}

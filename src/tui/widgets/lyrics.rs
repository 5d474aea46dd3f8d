//! Lyrics panel
//!
//! Branches on the result variant: text gets a scrollable block, a
//! fallback hit gets a link panel, misses and failures get a one-line
//! message. The save hint only appears for real text.

use crate::app::state::{AppState, Focus};
use crate::lookup::{LyricsResult, NOT_FOUND_MESSAGE};
use crate::tui::theme::{LoadingSpinner, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let icons = &theme.icons;

    let border_color = if state.focus == Focus::Results {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let title = match &state.lyrics {
        Some(r) if r.offers_download() => {
            format!(" {} Lyrics {} {} save ", icons.lyrics, icons.bullet, icons.download)
        }
        _ => format!(" {} Lyrics ", icons.lyrics),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.loading {
        let spinner = LoadingSpinner::frame(state.tick);
        let loading = Paragraph::new(Line::from(format!("{} Loading...", spinner)))
            .style(Style::default().fg(theme.palette.fg_secondary))
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    match &state.lyrics {
        None => {
            let hint = Paragraph::new(Line::from(
                "Enter an artist and song title, then press Enter.",
            ))
            .style(Style::default().fg(theme.palette.fg_secondary))
            .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
        }
        Some(LyricsResult::Found { text }) => {
            let p = Paragraph::new(text.as_str())
                .style(Style::default().fg(theme.palette.fg_primary))
                .scroll((state.lyrics_scroll as u16, 0));
            frame.render_widget(p, inner);
        }
        Some(LyricsResult::ExternalLink { url }) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Lyrics not available in the API.",
                    Style::default().fg(theme.palette.fg_secondary),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled(
                        format!("{} ", icons.link),
                        Style::default().fg(theme.palette.accent),
                    ),
                    Span::styled(
                        url.as_str(),
                        Style::default()
                            .fg(theme.palette.accent)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]),
                Line::default(),
                Line::from(Span::styled(
                    "Open the link in your browser to view them.",
                    Style::default().fg(theme.palette.fg_secondary),
                )),
            ];
            let p = Paragraph::new(lines).wrap(Wrap { trim: false });
            frame.render_widget(p, inner);
        }
        Some(LyricsResult::NotFound) => {
            let p = Paragraph::new(Line::from(NOT_FOUND_MESSAGE))
                .style(Style::default().fg(theme.palette.fg_secondary))
                .alignment(Alignment::Center);
            frame.render_widget(p, inner);
        }
        Some(LyricsResult::Error { message }) => {
            let p = Paragraph::new(Line::from(format!("{} {}", icons.error, message)))
                .style(Style::default().fg(theme.palette.error))
                .alignment(Alignment::Center);
            frame.render_widget(p, inner);
        }
    }
}

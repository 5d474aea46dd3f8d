//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{help, inputs, lyrics, song_info};

/// Main layout structure:
/// ┌───────────────────┬───────────────────┐
/// │      Artist       │     Song Title    │
/// ├───────────┬───────┴───────────────────┤
/// │ Song info │          Lyrics           │
/// │ (if any)  │                           │
/// ├───────────┴───────────────────────────┤
/// │ status / toast                        │
/// └───────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let theme = get_theme(state.dark_mode);
    let root = frame.area();

    // Paint the themed background before anything else.
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.palette.bg_primary)
                .fg(theme.palette.fg_primary),
        ),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input boxes
            Constraint::Min(5),    // Result panels
            Constraint::Length(1), // Status line
        ])
        .split(root);

    inputs::render(frame, state, rows[0]);

    if state.song_info.is_some() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(38), // Song info panel
                Constraint::Min(30),    // Lyrics
            ])
            .split(rows[1]);
        song_info::render(frame, state, cols[0]);
        lyrics::render(frame, state, cols[1]);
    } else {
        lyrics::render(frame, state, rows[1]);
    }

    render_status_line(frame, state, rows[2]);

    if state.show_help {
        help::render(frame, state, root);
    }
}

fn render_status_line(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let icons = &theme.icons;

    // A live toast takes the line over from the status text.
    let line = if let Some(toast) = &state.toast {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.success),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        Line::from(Span::styled(
            format!(" {} {}", icon, toast.message),
            Style::default().fg(color),
        ))
    } else {
        let mode = if state.dark_mode { icons.moon } else { icons.sun };
        Line::from(vec![
            Span::styled(
                format!(" {}", state.status),
                Style::default().fg(theme.palette.fg_secondary),
            ),
            Span::styled(
                format!("  {} Ctrl+t theme {} F1 help", mode, icons.bullet),
                Style::default().fg(theme.palette.fg_secondary),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

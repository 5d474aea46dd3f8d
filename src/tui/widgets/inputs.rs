//! Artist and song title input boxes

use crate::app::state::{AppState, Focus};
use crate::tui::theme::{LoadingSpinner, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_field(
        frame,
        state,
        cols[0],
        " Artist ",
        &state.artist_input,
        state.focus == Focus::Artist,
    );
    render_field(
        frame,
        state,
        cols[1],
        " Song Title ",
        &state.song_input,
        state.focus == Focus::Song,
    );
}

fn render_field(
    frame: &mut Frame,
    state: &AppState,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
) {
    let theme = get_theme(state.dark_mode);

    let border_color = if is_focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));

    let prompt = if state.loading && is_focused {
        let spinner = LoadingSpinner::frame(state.tick);
        format!("{} {}", value, spinner)
    } else {
        let cursor = if is_focused { "▏" } else { "" };
        format!("{}{}", value, cursor)
    };

    let p = Paragraph::new(Line::from(prompt))
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block);
    frame.render_widget(p, area);
}

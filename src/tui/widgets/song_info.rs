//! Song info panel - catalog metadata for the active lookup

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let icons = &theme.icons;

    let Some(info) = &state.song_info else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Song Info ", icons.music))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_width = inner.width.saturating_sub(2) as usize;

    let label = Style::default().fg(theme.palette.fg_secondary);
    let value = Style::default()
        .fg(theme.palette.fg_primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} Album: ", icons.album), label),
            Span::styled(truncate_str(&info.album, max_width), value),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} Released: ", icons.calendar), label),
            Span::styled(info.release_date.clone(), value),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!(" {} Artwork:", icons.link),
            label,
        )),
        Line::from(Span::styled(
            format!("   {}", truncate_str(&info.artwork_url, max_width)),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];

    if let Some(preview) = &info.preview_url {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {} Preview:", icons.preview),
            label,
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", truncate_str(preview, max_width)),
            Style::default().fg(theme.palette.fg_secondary),
        )));
    }

    let p = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(p, inner);
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

//! Help overlay showing keybindings

use crate::app::state::AppState;
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the help overlay centered over the whole frame
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let icons = &theme.icons;

    let popup = centered_rect(area, 60, 70);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_secondary))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Input", &theme),
        keybind("Tab / Shift+Tab", "Cycle focus", &theme),
        keybind("Enter", "Look up lyrics", &theme),
        keybind("Ctrl+u", "Clear field", &theme),
        keybind("Down", "Jump to result", &theme),
        Line::default(),
        section_header("Result", &theme),
        keybind("j / Down", "Scroll down", &theme),
        keybind("k / Up", "Scroll up", &theme),
        keybind("g / G", "Top / bottom", &theme),
        keybind("s", "Save lyrics to file", &theme),
        keybind("i / Esc", "Back to input", &theme),
    ];

    let right_content = vec![
        section_header("Theme", &theme),
        keybind("Ctrl+t", "Toggle dark/light", &theme),
        keybind("t", "Toggle (in result)", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("F1 / ?", "This overlay", &theme),
        keybind("q", "Quit (in result)", &theme),
        keybind("Esc", "Quit (in input)", &theme),
    ];

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn keybind(keys: &str, action: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", keys),
            Style::default().fg(theme.palette.fg_primary),
        ),
        Span::styled(
            action.to_string(),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ])
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

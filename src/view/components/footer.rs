use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

/// Render footer status bar with keybinding hints.
/// The latest error replaces the hints until the next one.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = build_footer_text(state);

    let footer = Paragraph::new(footer_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

/// Pure function: build footer text based on current state.
fn build_footer_text(state: &AppState) -> Line<'static> {
    if let Some(error) = state.errors.back() {
        return Line::from(Span::styled(
            format!("error: {}", error),
            Style::default().fg(Theme::ERROR),
        ));
    }

    let mut spans = Vec::new();
    let mut hint = |key: &'static str, action: &'static str| {
        spans.push(Span::styled(key, Style::default().fg(Theme::INFO)));
        spans.push(Span::raw(action));
    };

    hint("Esc", ":cancel ");
    hint("Tab", ":service ");
    hint("↑/↓", ":move ");
    hint("Enter", ":add/remove ");
    if !state.team_so_far.is_empty() {
        hint("Ctrl-F", ":start chat ");
    }
    if state.role_picker.is_some() {
        hint("Ctrl-R", ":role ");
    }
    if state.contacts_banner_visible() {
        hint("Ctrl-A", ":import contacts ");
    }

    Line::from(spans)
}

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

pub const BANNER_HEIGHT: u16 = 4;

/// Render the contact-import promo. Draws nothing unless the store
/// knows contacts are not imported yet.
pub fn render_contacts_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.contacts_banner_visible() {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            "Import your phone contacts and start encrypted chats with your friends.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "[Ctrl-A] Import contacts",
                Style::default().fg(Theme::BLUE).bg(Color::White),
            ),
            Span::raw("   "),
            Span::styled("[Ctrl-L] Later", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM))
        .style(Style::default().bg(Theme::BLUE))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

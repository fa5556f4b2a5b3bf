use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::model::{ServiceId, Theme};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn spinner_glyph(frame_index: usize) -> &'static str {
    SPINNER[frame_index % SPINNER.len()]
}

/// Render the centered "Loading" indicator used while recs or results are pending
pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_glyph(state.spinner_frame),
            Style::default().fg(Theme::MUTED_TEXT),
        )),
        Line::from(Span::styled(
            "Loading",
            Style::default()
                .fg(Theme::MUTED_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let inner = vertically_centered(area, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render the prompt shown for an external service with nothing to list
pub fn render_empty_service(frame: &mut Frame, area: Rect, state: &AppState, service: ServiceId) {
    let lines = build_empty_service_lines(service);

    // Desktop keeps the prompt narrow; mobile uses most of the width
    let width_pct = if state.platform.is_mobile() { 80 } else { 60 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(area);

    let inner = vertically_centered(columns[1], 6);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn build_empty_service_lines(service: ServiceId) -> Vec<Line<'static>> {
    let accent = Style::default()
        .fg(Theme::service_color(service))
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(service.icon(), accent)),
        Line::from(""),
        Line::from(Span::styled(
            format!("Enter a {} username above.", service.label()),
            Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Start a chat with anyone on {}, even if they don't have an account.",
                service.label()
            ),
            Style::default().fg(Theme::MUTED_TEXT),
        )),
    ]
}

/// Modal spinner on top of whatever base state is showing while the team is created
pub fn render_waiting_overlay(frame: &mut Frame, state: &AppState) {
    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            spinner_glyph(state.spinner_frame),
            Style::default().fg(Theme::TEXT),
        )),
        Line::from(Span::styled(
            "Creating conversation…",
            Style::default().fg(Theme::TEXT),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::ACTIVE_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block.style(Style::default().bg(Theme::OVERLAY_BG)), area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(Theme::OVERLAY_BG)),
        vertically_centered(inner, 2),
    );
}

/// Centered rect using a percentage of the available rect `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Strip of `height` rows in the vertical middle of `area`
fn vertically_centered(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

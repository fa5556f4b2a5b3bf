use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{RolePicker, TeamRole, Theme};

/// Render the search box with the team picked so far.
/// Mobile gets its own bordered row; desktop a plain underlined input.
pub fn render_team_box(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = build_team_line(state);

    let block = if state.platform.is_mobile() {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::PANEL_BORDER))
    } else {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
            .title(" Start a conversation ")
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .style(Style::default().bg(Theme::SURFACE));

    frame.render_widget(paragraph, area);
}

/// Pure function: member chips, then the query with cursor
fn build_team_line(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();

    for member in &state.team_so_far {
        spans.push(Span::styled(
            format!("{} {}", member.service.icon(), member.username),
            Style::default()
                .fg(Theme::service_color(member.service))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    if state.search_string.is_empty() && state.team_so_far.is_empty() {
        spans.push(Span::styled(
            format!("Search {}", state.selected_service.label()),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    } else {
        spans.push(Span::styled(
            state.search_string.clone(),
            Style::default().fg(Theme::TEXT),
        ));
    }
    spans.push(Span::styled("█", Style::default().fg(Theme::ACTIVE_BORDER)));

    Line::from(spans)
}

/// Render the "make it a team" hint under the team box
pub fn render_make_team_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.make_team_hint_visible() {
        return;
    }
    frame.render_widget(Paragraph::new(build_hint_line(state)), area);
}

fn build_hint_line(state: &AppState) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(
                "Add up to {} more people. Need more?",
                state.remaining_chat_slots()
            ),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
        Span::styled(
            " Make it a team. (Ctrl-T)",
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

/// Render the role row when adding people to an existing team
pub fn render_role_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(picker) = &state.role_picker else {
        return;
    };
    frame.render_widget(Paragraph::new(build_role_line(picker)), area);
}

/// Pure function: roles with the selection marked, then the notification toggle.
/// Collapsed, only the selected role shows.
fn build_role_line(picker: &RolePicker) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Add as: ",
        Style::default().fg(Theme::MUTED_TEXT),
    )];

    if picker.open {
        for role in TeamRole::ALL {
            let style = if role == picker.selected {
                Style::default()
                    .fg(Theme::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if picker.is_disabled(role) {
                Style::default()
                    .fg(Theme::MUTED_TEXT)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Theme::TEXT)
            };
            spans.push(Span::styled(format!(" {} ", role.label()), style));
        }
    } else {
        spans.push(Span::styled(
            picker.selected.label(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ));
    }

    let notify = if picker.send_notification { "on" } else { "off" };
    spans.push(Span::styled(
        format!("  notify: {}", notify),
        Style::default().fg(Theme::MUTED_TEXT),
    ));
    spans.push(Span::styled(" (Ctrl-R)", Style::default().fg(Theme::INFO)));

    Line::from(spans)
}

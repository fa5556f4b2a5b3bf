use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{FollowingState, SearchResult, ServiceId, Theme};

/// Render the selectable result rows.
/// Desktop highlights the keyboard row; mobile rows are tap targets with no highlight.
pub fn render_user_list(frame: &mut Frame, area: Rect, state: &AppState, items: &[SearchResult]) {
    let block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(Theme::BACKGROUND));

    if items.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No matches",
            Style::default().fg(Theme::MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = build_user_items(state, items);
    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Theme::SELECTION_BG));

    let selected = if state.platform.is_mobile() {
        None
    } else {
        state.highlighted_index
    };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Pure function: one list row per result
fn build_user_items(state: &AppState, items: &[SearchResult]) -> Vec<ListItem<'static>> {
    items
        .iter()
        .map(|result| ListItem::new(build_user_line(state, result)))
        .collect()
}

fn build_user_line(state: &AppState, result: &SearchResult) -> Line<'static> {
    let service = state.selected_service;
    let (marker, marker_color) = if result.is_pre_existing_team_member {
        ("•", Theme::MUTED_TEXT)
    } else if state.shows_in_team(result) {
        ("✓", Theme::SUCCESS)
    } else {
        ("+", Theme::ACCENT)
    };

    let mut spans = vec![
        Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
        Span::styled(
            result.handle_for(service).to_string(),
            Style::default()
                .fg(Theme::following_color(result.following_state))
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if !result.pretty_name.is_empty() {
        spans.push(Span::styled(
            format!("  {}", result.pretty_name),
            Style::default().fg(Theme::TEXT),
        ));
    }
    if !result.display_label.is_empty() {
        spans.push(Span::styled(
            format!("  {}", result.display_label),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    }

    let others = other_services(result, service);
    if !others.is_empty() {
        spans.push(Span::styled(
            format!("  {}", others),
            Style::default().fg(Theme::MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
    }

    if result.is_pre_existing_team_member {
        spans.push(Span::styled(
            "  already a member",
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    } else if result.following_state == FollowingState::You {
        spans.push(Span::styled("  (you)", Style::default().fg(Theme::MUTED_TEXT)));
    }

    Line::from(spans)
}

/// Icons for the services other than the one being searched
fn other_services(result: &SearchResult, current: ServiceId) -> String {
    result
        .services
        .keys()
        .filter(|s| **s != current && **s != ServiceId::Keybase)
        .map(|s| s.icon())
        .collect::<Vec<_>>()
        .join(" ")
}

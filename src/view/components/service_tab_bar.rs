use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::{ServiceId, Theme};

/// Render one tab per service; the selected tab is bold in its accent color.
/// Counts appear next to labels once the current query has them.
pub fn render_service_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(build_tab_line(state)).style(Style::default().bg(Theme::HEADER_BG));
    frame.render_widget(paragraph, area);
}

fn tab_label(state: &AppState, service: ServiceId) -> String {
    // Mobile tabs are icon-only except for the selected one
    let name = if state.platform.is_mobile() && service != state.selected_service {
        String::new()
    } else {
        format!(" {}", service.label())
    };
    let count = if state.search_string.is_empty() {
        None
    } else {
        state.service_result_count.get(&service).copied().flatten()
    };
    match count {
        Some(n) => format!("{}{} ({})", service.icon(), name, n),
        None => format!("{}{}", service.icon(), name),
    }
}

fn build_tab_line(state: &AppState) -> Line<'static> {
    let mut spans = Vec::with_capacity(ServiceId::ALL.len() * 2);
    for service in ServiceId::ALL {
        let style = if service == state.selected_service {
            Style::default()
                .fg(Theme::service_color(service))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::MUTED_TEXT)
        };
        spans.push(Span::styled(tab_label(state, service), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::AppState;
use crate::resolver::ViewState;

use super::components::{
    render_contacts_banner, render_empty_service, render_footer, render_loading,
    render_make_team_hint, render_role_picker, render_service_tab_bar, render_team_box,
    render_user_list, BANNER_HEIGHT,
};

/// Render the team-building screen into the given area.
/// The body is chosen by the resolver; the waiting overlay is drawn by the dispatcher.
pub fn render_team_building(frame: &mut Frame, state: &AppState, area: Rect) {
    let team_box_height = if state.platform.is_mobile() { 3 } else { 2 };
    let hint_height = if state.make_team_hint_visible() { 1 } else { 0 };
    let role_height = if state.role_picker.is_some() { 1 } else { 0 };
    let banner_height = if state.contacts_banner_visible() {
        BANNER_HEIGHT
    } else {
        0
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(team_box_height), // Search + team so far
            Constraint::Length(hint_height),     // Make it a team
            Constraint::Length(role_height),     // Role picker
            Constraint::Length(1),               // Service tabs
            Constraint::Length(banner_height),   // Contacts banner
            Constraint::Min(3),                  // Body
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    render_team_box(frame, layout[0], state);
    render_make_team_hint(frame, layout[1], state);
    render_role_picker(frame, layout[2], state);
    render_service_tab_bar(frame, layout[3], state);
    render_contacts_banner(frame, layout[4], state);
    render_body(frame, layout[5], state);
    render_footer(frame, layout[6], state);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let resolution = state.resolution();
    match resolution.view {
        ViewState::RecommendationsPending | ViewState::SearchLoading => {
            render_loading(frame, area, state);
        }
        ViewState::EmptyServicePrompt { service } => {
            render_empty_service(frame, area, state, service);
        }
        ViewState::ResultsList { items } => {
            render_user_list(frame, area, state, items);
        }
    }
}

use ratatui::Frame;

use crate::app::AppState;

pub mod components;
pub mod team_building;

pub use team_building::render_team_building;

/// Main view dispatcher.
/// Draws the picker, then the create-waiting overlay on top of whatever state it shows.
pub fn render(state: &AppState, frame: &mut Frame) {
    let resolution = state.resolution();

    let area = frame.area();
    team_building::render_team_building(frame, state, area);

    if resolution.is_create_waiting {
        components::render_waiting_overlay(frame, state);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;
use crate::backend::{TeamRequest, PAGE_SIZE};
use crate::effects::Effect;
use crate::model::{ServiceId, TeamMember, TeamRole, UserId};

/// Keyboard state transition.
/// Takes current state + keyboard event; backend work is queued as effects.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Only cancel is accepted while the team is being created
    if state.waiting_for_create {
        if matches!(key.code, KeyCode::Esc) || (ctrl && key.code == KeyCode::Char('c')) {
            state.should_quit = true;
        }
        return;
    }

    if state.role_picker_open() {
        handle_role_picker_key(state, key);
        return;
    }

    match key.code {
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('c') if ctrl => state.should_quit = true,
        KeyCode::Char('f') if ctrl => on_finish_team_building(state),
        KeyCode::Char('t') if ctrl => on_make_it_a_team(state),
        KeyCode::Char('a') if ctrl => on_import_contacts(state),
        KeyCode::Char('l') if ctrl => on_contacts_later(state),
        KeyCode::Char('r') if ctrl => on_change_show_role_picker(state),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => {
            let mut text = state.search_string.clone();
            text.push(c);
            on_change_text(state, text);
        }
        KeyCode::Backspace => on_backspace(state),
        KeyCode::Tab => {
            let next = state.selected_service.next();
            on_change_service(state, next);
        }
        KeyCode::BackTab => {
            let prev = state.selected_service.prev();
            on_change_service(state, prev);
        }
        KeyCode::Up => on_up_arrow(state),
        KeyCode::Down => on_down_arrow(state),
        KeyCode::PageDown => on_search_for_more(state),
        KeyCode::Enter => on_enter(state),
        _ => {}
    }
}

/// Keys while the role picker is open: it captures everything but quit
fn handle_role_picker_key(state: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Some(picker) = state.role_picker.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('c') if ctrl => state.should_quit = true,
        KeyCode::Char('r') if ctrl => picker.toggle_open(),
        KeyCode::Esc | KeyCode::Enter => picker.open = false,
        KeyCode::Up => picker.step(-1),
        KeyCode::Down => picker.step(1),
        KeyCode::Char('n') => picker.toggle_notification(),
        _ => {}
    }
}

pub fn on_change_show_role_picker(state: &mut AppState) {
    if let Some(picker) = state.role_picker.as_mut() {
        picker.toggle_open();
    }
}

/// Select a role in the picker; disabled roles are rejected
pub fn on_select_role(state: &mut AppState, role: TeamRole) -> bool {
    state
        .role_picker
        .as_mut()
        .is_some_and(|picker| picker.select(role))
}

pub fn on_change_send_notification(state: &mut AppState) {
    if let Some(picker) = state.role_picker.as_mut() {
        picker.toggle_notification();
    }
}

/// New query text: results go absent until the search lands.
/// Clearing the query falls back to recommendations without searching.
pub fn on_change_text(state: &mut AppState, text: String) {
    state.search_string = text;
    state.search_limit = PAGE_SIZE;
    state.search_results = None;
    state.service_result_count.clear();
    state.highlighted_index = None;

    if !state.search_string.is_empty() {
        let query = state.current_query();
        state.push_effect(Effect::Search(query));
    }
    state.clamp_highlight();
}

/// Counts cover every tab, so only the result list is refetched
pub fn on_change_service(state: &mut AppState, service: ServiceId) {
    state.selected_service = service;
    state.search_limit = PAGE_SIZE;
    state.search_results = None;
    state.highlighted_index = None;

    if !state.search_string.is_empty() {
        let query = state.current_query();
        state.push_effect(Effect::Search(query));
    }
    state.clamp_highlight();
}

/// With an empty query Backspace removes the last picked user
fn on_backspace(state: &mut AppState) {
    if state.search_string.is_empty() {
        if let Some(removed) = state.team_so_far.pop() {
            tracing::debug!(user = %removed.user_id, "removed last team member");
        }
        return;
    }
    let mut text = state.search_string.clone();
    text.pop();
    on_change_text(state, text);
}

fn on_up_arrow(state: &mut AppState) {
    if let Some(idx) = state.highlighted_index {
        state.highlighted_index = Some(idx.saturating_sub(1));
    }
}

/// Moving onto the last row asks for the next page
fn on_down_arrow(state: &mut AppState) {
    let len = state.visible_items().len();
    if len == 0 {
        return;
    }
    let next = state
        .highlighted_index
        .map_or(0, |idx| (idx + 1).min(len - 1));
    state.highlighted_index = Some(next);
    if next == len - 1 {
        on_search_for_more(state);
    }
}

/// Grow the page when the current one came back full
pub fn on_search_for_more(state: &mut AppState) {
    if state.search_string.is_empty() {
        return;
    }
    let Some(results) = state.search_results.as_ref() else {
        return;
    };
    if results.len() < state.search_limit {
        return;
    }
    state.search_limit += PAGE_SIZE;
    let query = state.current_query();
    state.push_effect(Effect::Search(query));
}

/// Toggle the highlighted row; with nothing to pick, finish
fn on_enter(state: &mut AppState) {
    if let Some(result) = state.highlighted().cloned() {
        if state.shows_in_team(&result) {
            on_remove(state, &result.user_id);
        } else {
            on_add(state, &result.user_id);
        }
        return;
    }
    if state.search_string.is_empty() && !state.team_so_far.is_empty() {
        on_finish_team_building(state);
    }
}

/// Add a visible result to the team and clear the query
pub fn on_add(state: &mut AppState, user_id: &UserId) {
    let Some(result) = state
        .visible_items()
        .iter()
        .find(|r| &r.user_id == user_id)
        .cloned()
    else {
        return;
    };
    if result.is_pre_existing_team_member || state.is_in_team(user_id) {
        return;
    }
    tracing::debug!(user = %user_id, service = %state.selected_service, "added team member");
    let member = TeamMember::from_result(&result, state.selected_service);
    state.team_so_far.push(member);
    on_change_text(state, String::new());
}

pub fn on_remove(state: &mut AppState, user_id: &UserId) {
    state.team_so_far.retain(|m| &m.user_id != user_id);
}

pub fn on_finish_team_building(state: &mut AppState) {
    if state.team_so_far.is_empty() {
        return;
    }
    state.waiting_for_create = true;
    let mut request = TeamRequest::new(state.team_so_far.clone());
    if let Some(picker) = &state.role_picker {
        request = request.with_role(picker.selected, picker.send_notification);
    }
    state.push_effect(Effect::CreateTeam(request));
}

fn on_make_it_a_team(state: &mut AppState) {
    if !state.make_team_hint_visible() {
        return;
    }
    state.make_team_requested = true;
    on_finish_team_building(state);
}

fn on_import_contacts(state: &mut AppState) {
    if !state.contacts_banner_visible() {
        return;
    }
    let action = state.contacts.import_action();
    state.push_effect(Effect::Contacts(action));
}

fn on_contacts_later(state: &mut AppState) {
    if state.contacts_banner_visible() {
        state.contacts.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::{ContactsAction, PermissionStatus};
    use crate::model::{Platform, RolePicker, SearchResult};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn with_recs(ids: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.recommendations = Some(ids.iter().map(|id| SearchResult::new(*id, *id)).collect());
        state.clamp_highlight();
        state
    }

    #[test]
    fn typing_queues_search_and_clears_results() {
        let mut state = with_recs(&["alice"]);
        handle_key(&mut state, key(KeyCode::Char('b')));

        assert_eq!(state.search_string, "b");
        assert!(state.search_results.is_none());
        assert_eq!(state.resolution().view.name(), "search_loading");
        assert!(matches!(&state.effects[..], [Effect::Search(q)] if q.text == "b"));
    }

    #[test]
    fn backspace_to_empty_does_not_search() {
        let mut state = with_recs(&["alice"]);
        handle_key(&mut state, key(KeyCode::Char('b')));
        state.take_effects();
        handle_key(&mut state, key(KeyCode::Backspace));

        assert!(state.search_string.is_empty());
        assert!(state.effects.is_empty());
        assert_eq!(state.resolution().view.name(), "results_list");
    }

    #[test]
    fn backspace_on_empty_query_removes_last_member() {
        let mut state = with_recs(&["alice", "bob"]);
        on_add(&mut state, &"alice".into());
        on_add(&mut state, &"bob".into());
        handle_key(&mut state, key(KeyCode::Backspace));

        assert_eq!(state.team_so_far.len(), 1);
        assert_eq!(state.team_so_far[0].user_id.as_str(), "alice");
    }

    #[test]
    fn arrows_move_highlight_within_list() {
        let mut state = with_recs(&["a", "b", "c"]);
        assert_eq!(state.highlighted_index, Some(0));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.highlighted_index, Some(2));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.highlighted_index, Some(1));
    }

    #[test]
    fn enter_adds_then_removes_highlighted() {
        let mut state = with_recs(&["alice"]);
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.is_in_team(&"alice".into()));

        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.team_so_far.is_empty());
    }

    #[test]
    fn pre_existing_member_cannot_be_added() {
        let mut state = AppState::new();
        state.recommendations = Some(vec![SearchResult::new("carol", "carol").pre_existing_member()]);
        on_add(&mut state, &"carol".into());
        assert!(state.team_so_far.is_empty());
    }

    #[test]
    fn add_clears_query() {
        let mut state = AppState::new();
        state.search_string = "al".into();
        state.search_results = Some(vec![SearchResult::new("alice", "alice")]);
        state.service_result_count.insert(ServiceId::Keybase, Some(1));
        state.clamp_highlight();

        handle_key(&mut state, key(KeyCode::Enter));

        assert_eq!(state.team_so_far.len(), 1);
        assert!(state.search_string.is_empty());
    }

    #[test]
    fn tab_cycles_service_and_researches() {
        let mut state = AppState::new();
        state.search_string = "bob".into();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.selected_service, ServiceId::Contact);
        assert!(matches!(&state.effects[..], [Effect::Search(q)] if q.service == ServiceId::Contact));

        handle_key(&mut state, key(KeyCode::BackTab));
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.selected_service, ServiceId::Hackernews);
    }

    #[test]
    fn enter_with_empty_query_and_team_finishes() {
        let mut state = with_recs(&[]);
        state.team_so_far.push(TeamMember::from_result(
            &SearchResult::new("alice", "alice"),
            ServiceId::Keybase,
        ));
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.waiting_for_create);
        assert!(matches!(&state.effects[..], [Effect::CreateTeam(r)] if r.members.len() == 1 && r.role.is_none()));
    }

    #[test]
    fn finish_without_team_is_noop() {
        let mut state = AppState::new();
        handle_key(&mut state, ctrl('f'));
        assert!(!state.waiting_for_create);
        assert!(state.effects.is_empty());
    }

    #[test]
    fn waiting_ignores_everything_but_cancel() {
        let mut state = with_recs(&["alice"]);
        state.waiting_for_create = true;
        handle_key(&mut state, key(KeyCode::Char('x')));
        assert!(state.search_string.is_empty());
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.should_quit);
    }

    #[test]
    fn search_for_more_only_when_page_full() {
        let mut state = AppState::new();
        state.search_string = "a".into();
        state.search_results = Some(vec![SearchResult::new("a", "a")]);
        on_search_for_more(&mut state);
        assert!(state.effects.is_empty());

        state.search_results = Some(
            (0..PAGE_SIZE)
                .map(|i| SearchResult::new(format!("u{}", i), "u"))
                .collect(),
        );
        on_search_for_more(&mut state);
        assert_eq!(state.search_limit, PAGE_SIZE * 2);
        assert!(matches!(&state.effects[..], [Effect::Search(q)] if q.limit == PAGE_SIZE * 2));
    }

    #[test]
    fn make_team_requires_hint() {
        let mut state = AppState::new();
        handle_key(&mut state, ctrl('t'));
        assert!(!state.make_team_requested);

        state.team_so_far.push(TeamMember::from_result(
            &SearchResult::new("alice", "alice"),
            ServiceId::Keybase,
        ));
        handle_key(&mut state, ctrl('t'));
        assert!(state.make_team_requested);
        assert!(state.waiting_for_create);
    }

    #[test]
    fn import_contacts_requests_permission_when_banner_visible() {
        let mut state = AppState::new().with_platform(Platform::Mobile);
        handle_key(&mut state, ctrl('a'));
        assert!(state.effects.is_empty());

        state.contacts.loaded(false);
        handle_key(&mut state, ctrl('a'));
        assert_eq!(
            state.effects,
            vec![Effect::Contacts(ContactsAction::RequestPermissions {
                then_toggle_import_on: true
            })]
        );
    }

    #[test]
    fn import_contacts_with_permission_enables_directly() {
        let mut state = AppState::new().with_platform(Platform::Mobile);
        state.contacts.loaded(false);
        state.contacts.permission = PermissionStatus::Granted;
        handle_key(&mut state, ctrl('a'));
        assert_eq!(
            state.effects,
            vec![Effect::Contacts(ContactsAction::EditImportEnabled { enable: true })]
        );
    }

    #[test]
    fn later_dismisses_banner() {
        let mut state = AppState::new().with_platform(Platform::Mobile);
        state.contacts.loaded(false);
        assert!(state.contacts_banner_visible());
        handle_key(&mut state, ctrl('l'));
        assert!(!state.contacts_banner_visible());
    }

    #[test]
    fn ctrl_chars_do_not_type() {
        let mut state = AppState::new();
        handle_key(&mut state, ctrl('z'));
        assert!(state.search_string.is_empty());
    }

    fn with_picker(picker: RolePicker) -> AppState {
        let mut state = with_recs(&["alice"]);
        state.role_picker = Some(picker);
        state
    }

    #[test]
    fn ctrl_r_without_picker_does_nothing() {
        let mut state = with_recs(&["alice"]);
        handle_key(&mut state, ctrl('r'));
        assert!(!state.role_picker_open());
        assert!(state.search_string.is_empty());
    }

    #[test]
    fn open_picker_captures_arrows_and_notification() {
        let mut state = with_picker(RolePicker::new());
        handle_key(&mut state, ctrl('r'));
        assert!(state.role_picker_open());

        handle_key(&mut state, key(KeyCode::Up));
        handle_key(&mut state, key(KeyCode::Char('n')));
        handle_key(&mut state, key(KeyCode::Enter));

        let picker = state.role_picker.as_ref().unwrap();
        assert_eq!(picker.selected, TeamRole::Admin);
        assert!(!picker.send_notification);
        assert!(!picker.open);
        // Keys went to the picker, not the query or the list
        assert!(state.search_string.is_empty());
        assert!(state.team_so_far.is_empty());
        assert_eq!(state.highlighted_index, Some(0));
    }

    #[test]
    fn selecting_disabled_role_is_rejected() {
        let mut state = with_picker(RolePicker::new().with_disabled([TeamRole::Owner]));
        assert!(!on_select_role(&mut state, TeamRole::Owner));
        assert!(on_select_role(&mut state, TeamRole::Reader));
        assert_eq!(state.role_picker.as_ref().unwrap().selected, TeamRole::Reader);

        handle_key(&mut state, ctrl('r'));
        for _ in 0..4 {
            handle_key(&mut state, key(KeyCode::Up));
        }
        assert_eq!(state.role_picker.as_ref().unwrap().selected, TeamRole::Admin);
    }

    #[test]
    fn send_notification_toggles() {
        let mut state = with_picker(RolePicker::new());
        on_change_send_notification(&mut state);
        assert!(!state.role_picker.as_ref().unwrap().send_notification);
        on_change_send_notification(&mut state);
        assert!(state.role_picker.as_ref().unwrap().send_notification);
    }

    #[test]
    fn finish_passes_selected_role() {
        let mut state = with_picker(RolePicker::new());
        on_select_role(&mut state, TeamRole::Reader);
        on_change_send_notification(&mut state);
        on_add(&mut state, &"alice".into());
        handle_key(&mut state, ctrl('f'));

        match &state.effects[..] {
            [Effect::CreateTeam(request)] => {
                assert_eq!(request.role, Some(TeamRole::Reader));
                assert!(!request.send_notification);
                assert_eq!(request.members.len(), 1);
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn ctrl_c_quits_from_open_picker() {
        let mut state = with_picker(RolePicker::new());
        handle_key(&mut state, ctrl('r'));
        handle_key(&mut state, ctrl('c'));
        assert!(state.should_quit);
    }
}

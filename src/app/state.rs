use std::collections::{BTreeMap, VecDeque};

use crate::backend::{SearchQuery, PAGE_SIZE};
use crate::contacts::ContactsImport;
use crate::effects::Effect;
use crate::model::{
    ConversationId, FeatureFlags, Platform, RolePicker, SearchResult, ServiceId, TeamMember,
    UserId,
};
use crate::resolver::{resolve, Resolution, ViewInputSnapshot, ViewState};

/// Chat size before "make it a team" is suggested
pub const MAX_CHAT_SIZE: usize = 15;

const MAX_ERRORS: usize = 100;

/// Main application state.
/// Mutated only by `update`; rendering reads it through `resolution()`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current query, empty when nothing is typed
    pub search_string: String,

    /// Active service tab
    pub selected_service: ServiceId,

    /// `None` until the first fetch lands
    pub recommendations: Option<Vec<SearchResult>>,

    /// `None` while the current query is in flight
    pub search_results: Option<Vec<SearchResult>>,

    /// Match count per service for the current query, `None` while unknown
    pub service_result_count: BTreeMap<ServiceId, Option<usize>>,

    /// Page limit for the current query
    pub search_limit: usize,

    /// Highlighted row in the visible list
    pub highlighted_index: Option<usize>,

    /// Users picked so far, in pick order
    pub team_so_far: Vec<TeamMember>,

    /// Team creation in flight
    pub waiting_for_create: bool,

    /// Conversation created on finish
    pub created: Option<ConversationId>,

    /// User asked to convert the chat into a team
    pub make_team_requested: bool,

    /// Contact-import banner store
    pub contacts: ContactsImport,

    /// Present only when adding people to an existing team
    pub role_picker: Option<RolePicker>,

    pub flags: FeatureFlags,

    pub platform: Platform,

    /// Error message ring buffer (for status bar display)
    pub errors: VecDeque<String>,

    /// Effects queued by update, drained by the main loop
    pub effects: Vec<Effect>,

    /// Spinner animation frame, advanced on tick
    pub spinner_frame: usize,

    /// Signal to quit the application
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new default application state
    pub fn new() -> Self {
        Self {
            search_string: String::new(),
            selected_service: ServiceId::Keybase,
            recommendations: None,
            search_results: None,
            service_result_count: BTreeMap::new(),
            search_limit: PAGE_SIZE,
            highlighted_index: None,
            team_so_far: Vec::new(),
            waiting_for_create: false,
            created: None,
            make_team_requested: false,
            contacts: ContactsImport::new(),
            role_picker: None,
            flags: FeatureFlags::default(),
            platform: Platform::Desktop,
            errors: VecDeque::with_capacity(MAX_ERRORS),
            effects: Vec::new(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_role_picker(mut self, picker: RolePicker) -> Self {
        self.role_picker = Some(picker);
        self
    }

    pub fn with_service(mut self, service: ServiceId) -> Self {
        self.selected_service = service;
        self
    }

    /// Recommendation mode: nothing typed, recs loaded, Keybase tab
    pub fn show_recs(&self) -> bool {
        self.flags.recommendations
            && self.search_string.is_empty()
            && self.recommendations.is_some()
            && self.selected_service == ServiceId::Keybase
    }

    /// The selected tab has a known count for the current query
    pub fn show_service_result_count(&self) -> bool {
        !self.search_string.is_empty()
            && self
                .service_result_count
                .get(&self.selected_service)
                .copied()
                .flatten()
                .is_some()
    }

    pub fn snapshot(&self) -> ViewInputSnapshot<'_> {
        ViewInputSnapshot {
            search_string: &self.search_string,
            recommendations: self.recommendations.as_deref(),
            search_results: self.search_results.as_deref(),
            show_recs: self.show_recs(),
            show_service_result_count: self.show_service_result_count(),
            selected_service: Some(self.selected_service),
            waiting_for_create: self.waiting_for_create,
        }
    }

    pub fn resolution(&self) -> Resolution<'_> {
        resolve(self.snapshot())
    }

    /// Rows currently on screen; empty unless the list state is resolved
    pub fn visible_items(&self) -> &[SearchResult] {
        match self.resolution().view {
            ViewState::ResultsList { items } => items,
            _ => &[],
        }
    }

    pub fn highlighted(&self) -> Option<&SearchResult> {
        self.highlighted_index
            .and_then(|idx| self.visible_items().get(idx))
    }

    pub fn is_in_team(&self, user_id: &UserId) -> bool {
        self.team_so_far.iter().any(|m| &m.user_id == user_id)
    }

    /// Row flag from the backend or from picks made in this session
    pub fn shows_in_team(&self, result: &SearchResult) -> bool {
        result.in_team || self.is_in_team(&result.user_id)
    }

    pub fn remaining_chat_slots(&self) -> usize {
        MAX_CHAT_SIZE.saturating_sub(self.team_so_far.len())
    }

    pub fn make_team_hint_visible(&self) -> bool {
        !self.team_so_far.is_empty() && self.flags.make_team
    }

    pub fn role_picker_open(&self) -> bool {
        self.role_picker.as_ref().is_some_and(|p| p.open)
    }

    pub fn contacts_banner_visible(&self) -> bool {
        self.contacts.banner_visible(&self.flags, self.platform)
    }

    /// Query for the current text, tab and page limit
    pub fn current_query(&self) -> SearchQuery {
        SearchQuery::new(self.search_string.clone(), self.selected_service)
            .with_limit(self.search_limit)
    }

    /// True when `query` is the latest request: same text, tab and page limit
    pub fn is_current_query(&self, query: &SearchQuery) -> bool {
        query.text == self.search_string
            && query.service == self.selected_service
            && query.limit == self.search_limit
    }

    /// Keep the highlight inside the visible list
    pub fn clamp_highlight(&mut self) {
        let len = self.visible_items().len();
        self.highlighted_index = if len == 0 {
            None
        } else {
            Some(self.highlighted_index.unwrap_or(0).min(len - 1))
        };
    }

    pub fn push_effect(&mut self, effect: Effect) {
        tracing::debug!(?effect, "effect queued");
        self.effects.push(effect);
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn push_error(&mut self, message: String) {
        if self.errors.len() >= MAX_ERRORS {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_default() {
        let state = AppState::default();
        assert!(state.search_string.is_empty());
        assert_eq!(state.selected_service, ServiceId::Keybase);
        assert!(state.recommendations.is_none());
        assert!(state.search_results.is_none());
        assert!(state.team_so_far.is_empty());
        assert!(!state.waiting_for_create);
        assert!(state.effects.is_empty());
        assert!(!state.should_quit);
        assert_eq!(state.platform, Platform::Desktop);
    }

    #[test]
    fn fresh_state_resolves_to_pending() {
        let state = AppState::new();
        assert_eq!(state.resolution().view, ViewState::RecommendationsPending);
    }

    #[test]
    fn show_recs_requires_keybase_tab() {
        let mut state = AppState::new();
        state.recommendations = Some(vec![]);
        assert!(state.show_recs());

        state.selected_service = ServiceId::Twitter;
        assert!(!state.show_recs());
    }

    #[test]
    fn show_recs_respects_flag() {
        let mut state = AppState::new().with_flags(FeatureFlags {
            recommendations: false,
            ..Default::default()
        });
        state.recommendations = Some(vec![]);
        assert!(!state.show_recs());
    }

    #[test]
    fn service_count_needs_query_and_known_count() {
        let mut state = AppState::new();
        state.service_result_count.insert(ServiceId::Keybase, Some(3));
        assert!(!state.show_service_result_count());

        state.search_string = "al".into();
        assert!(state.show_service_result_count());

        state.service_result_count.insert(ServiceId::Keybase, None);
        assert!(!state.show_service_result_count());
    }

    #[test]
    fn clamp_highlight_tracks_list_length() {
        let mut state = AppState::new();
        state.recommendations = Some(vec![
            SearchResult::new("a", "a"),
            SearchResult::new("b", "b"),
        ]);
        state.highlighted_index = Some(7);
        state.clamp_highlight();
        assert_eq!(state.highlighted_index, Some(1));

        state.recommendations = Some(vec![]);
        state.clamp_highlight();
        assert_eq!(state.highlighted_index, None);
    }

    #[test]
    fn remaining_slots_saturate() {
        let mut state = AppState::new();
        assert_eq!(state.remaining_chat_slots(), MAX_CHAT_SIZE);
        let member = TeamMember::from_result(&SearchResult::new("a", "a"), ServiceId::Keybase);
        state.team_so_far = vec![member; 20];
        assert_eq!(state.remaining_chat_slots(), 0);
    }

    #[test]
    fn error_ring_buffer_evicts_oldest() {
        let mut state = AppState::new();
        for i in 0..MAX_ERRORS + 5 {
            state.push_error(format!("error {}", i));
        }
        assert_eq!(state.errors.len(), MAX_ERRORS);
        assert_eq!(state.errors.front().unwrap(), "error 5");
    }

    #[test]
    fn take_effects_drains_queue() {
        let mut state = AppState::new();
        state.push_effect(Effect::FetchRecommendations);
        assert_eq!(state.take_effects(), vec![Effect::FetchRecommendations]);
        assert!(state.effects.is_empty());
    }
}

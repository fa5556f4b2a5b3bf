//! Named demo states for eyeballing each screen state without a backend.
//!
//! Each story builds a complete `AppState`; some only make sense on one
//! platform (the contacts banner is mobile-only).

use crate::app::AppState;
use crate::contacts::ImportEnabled;
use crate::model::{
    FollowingState, Platform, RolePicker, SearchResult, ServiceId, TeamMember, TeamRole,
};

#[derive(Debug, Clone, Copy)]
pub struct Story {
    pub name: &'static str,
    pub description: &'static str,
    /// Platforms the story is registered for
    pub platforms: &'static [Platform],
    build: fn(Platform) -> AppState,
}

impl Story {
    pub fn build(&self, platform: Platform) -> AppState {
        (self.build)(platform)
    }

    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

const ALL_PLATFORMS: &[Platform] = &[Platform::Desktop, Platform::Mobile];
const MOBILE_ONLY: &[Platform] = &[Platform::Mobile];

const STORIES: &[Story] = &[
    Story {
        name: "recs-pending",
        description: "Nothing typed, recommendations still loading",
        platforms: ALL_PLATFORMS,
        build: recs_pending,
    },
    Story {
        name: "loading",
        description: "Query typed, results in flight",
        platforms: ALL_PLATFORMS,
        build: loading,
    },
    Story {
        name: "empty-service",
        description: "External service selected with nothing to list",
        platforms: ALL_PLATFORMS,
        build: empty_service,
    },
    Story {
        name: "results",
        description: "Search results with one user already picked",
        platforms: ALL_PLATFORMS,
        build: results,
    },
    Story {
        name: "no-matches",
        description: "Search finished with zero results",
        platforms: ALL_PLATFORMS,
        build: no_matches,
    },
    Story {
        name: "waiting",
        description: "Team creation in flight over the results list",
        platforms: ALL_PLATFORMS,
        build: waiting,
    },
    Story {
        name: "role-picker",
        description: "Adding to an existing team, role picker open",
        platforms: ALL_PLATFORMS,
        build: role_picker,
    },
    Story {
        name: "contacts-banner",
        description: "Contacts not imported yet, banner offered",
        platforms: MOBILE_ONLY,
        build: contacts_banner,
    },
];

/// Stories registered for `platform`, in display order
pub fn registry(platform: Platform) -> Vec<&'static Story> {
    STORIES.iter().filter(|s| s.supports(platform)).collect()
}

pub fn find(name: &str, platform: Platform) -> Option<&'static Story> {
    registry(platform).into_iter().find(|s| s.name == name)
}

/// Demo directory shared by the stories
pub fn sample_users() -> Vec<SearchResult> {
    vec![
        SearchResult::new("alice", "alice")
            .with_pretty_name("Alice Liddell")
            .with_service(ServiceId::Keybase, "alice")
            .with_service(ServiceId::Twitter, "alice_in_tw")
            .with_following(FollowingState::Following),
        SearchResult::new("bob", "bob")
            .with_pretty_name("Bob Builder")
            .with_display_label("Followed by alice")
            .with_service(ServiceId::Keybase, "bob")
            .with_service(ServiceId::Github, "bobthebuilder")
            .with_following(FollowingState::NotFollowing),
        SearchResult::new("carol", "carol")
            .with_pretty_name("Carol Danvers")
            .with_service(ServiceId::Keybase, "carol")
            .pre_existing_member(),
        SearchResult::new("dave", "dave")
            .with_service(ServiceId::Keybase, "dave")
            .with_service(ServiceId::Reddit, "u_dave")
            .with_following(FollowingState::You),
    ]
}

fn base(platform: Platform) -> AppState {
    let mut state = AppState::new().with_platform(platform);
    // Stories never reach a backend; keep the contacts store quiet
    state.contacts.import_enabled = ImportEnabled::Known(true);
    state
}

fn recs_pending(platform: Platform) -> AppState {
    base(platform)
}

fn loading(platform: Platform) -> AppState {
    let mut state = base(platform);
    state.recommendations = Some(sample_users());
    state.search_string = "bo".into();
    state
}

fn empty_service(platform: Platform) -> AppState {
    let mut state = base(platform).with_service(ServiceId::Twitter);
    state.recommendations = Some(sample_users());
    state
}

fn results(platform: Platform) -> AppState {
    let mut state = base(platform);
    let users = sample_users();
    state.recommendations = Some(users.clone());
    state
        .team_so_far
        .push(TeamMember::from_result(&users[0], ServiceId::Keybase));
    state.search_string = "b".into();
    state.search_results = Some(users);
    state.service_result_count = ServiceId::ALL.iter().map(|s| (*s, Some(1))).collect();
    state.highlighted_index = Some(1);
    state
}

fn no_matches(platform: Platform) -> AppState {
    let mut state = base(platform);
    state.recommendations = Some(sample_users());
    state.search_string = "zzz".into();
    state.search_results = Some(Vec::new());
    state.service_result_count = ServiceId::ALL.iter().map(|s| (*s, Some(0))).collect();
    state
}

fn waiting(platform: Platform) -> AppState {
    let mut state = results(platform);
    state.waiting_for_create = true;
    state
}

fn role_picker(platform: Platform) -> AppState {
    let mut picker = RolePicker::new().with_disabled([TeamRole::Owner]);
    picker.toggle_open();
    results(platform).with_role_picker(picker)
}

fn contacts_banner(platform: Platform) -> AppState {
    let mut state = base(platform);
    state.recommendations = Some(sample_users());
    state.contacts.import_enabled = ImportEnabled::Known(false);
    state
}

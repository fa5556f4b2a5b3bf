use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{ServiceId, UserId};

/// Relationship between the current user and a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowingState {
    Following,
    NotFollowing,
    #[default]
    NoState,
    You,
}

/// One selectable row in the recommendation or search list.
/// Supplied by the backend; the UI never edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub user_id: UserId,
    pub username: String,
    #[serde(default)]
    pub pretty_name: String,
    #[serde(default)]
    pub display_label: String,
    /// Handle per external service
    #[serde(default)]
    pub services: BTreeMap<ServiceId, String>,
    #[serde(default)]
    pub in_team: bool,
    #[serde(default)]
    pub is_pre_existing_team_member: bool,
    #[serde(default)]
    pub following_state: FollowingState,
}

impl SearchResult {
    pub fn new(user_id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            pretty_name: String::new(),
            display_label: String::new(),
            services: BTreeMap::new(),
            in_team: false,
            is_pre_existing_team_member: false,
            following_state: FollowingState::NoState,
        }
    }

    pub fn with_pretty_name(mut self, pretty_name: impl Into<String>) -> Self {
        self.pretty_name = pretty_name.into();
        self
    }

    pub fn with_display_label(mut self, label: impl Into<String>) -> Self {
        self.display_label = label.into();
        self
    }

    pub fn with_service(mut self, service: ServiceId, handle: impl Into<String>) -> Self {
        self.services.insert(service, handle.into());
        self
    }

    pub fn with_following(mut self, state: FollowingState) -> Self {
        self.following_state = state;
        self
    }

    pub fn pre_existing_member(mut self) -> Self {
        self.is_pre_existing_team_member = true;
        self
    }

    /// Handle to show for the given service, falling back to the username
    pub fn handle_for(&self, service: ServiceId) -> &str {
        self.services
            .get(&service)
            .map(String::as_str)
            .unwrap_or(&self.username)
    }
}

/// A user already picked for the team being built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: UserId,
    pub username: String,
    pub pretty_name: String,
    pub service: ServiceId,
}

impl TeamMember {
    /// Capture a result as it was picked under `service`
    pub fn from_result(result: &SearchResult, service: ServiceId) -> Self {
        Self {
            user_id: result.user_id.clone(),
            username: result.handle_for(service).to_string(),
            pretty_name: result.pretty_name.clone(),
            service,
        }
    }
}

//! Seam to everything the picker does not own: user search, contact
//! settings and team creation. Calls block and are run off the UI thread by
//! the effect runner.

mod fixture;

pub use fixture::{search_fixture, FixtureBackend, FixtureContacts, FixtureData};

use std::collections::BTreeMap;

use crate::contacts::PermissionStatus;
use crate::error::BackendError;
use crate::model::{ConversationId, SearchResult, ServiceId, TeamMember, TeamRole};

/// Results fetched per page; "search for more" grows the limit by this much
pub const PAGE_SIZE: usize = 20;

/// One search request, identified by text and service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub service: ServiceId,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, service: ServiceId) -> Self {
        Self {
            text: text.into(),
            service,
            limit: PAGE_SIZE,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Results for the queried service plus match counts for every service tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    pub counts: BTreeMap<ServiceId, usize>,
}

/// Finish request: the picked members, plus the role picker's choice when
/// adding to an existing team
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRequest {
    pub members: Vec<TeamMember>,
    pub role: Option<TeamRole>,
    pub send_notification: bool,
}

impl TeamRequest {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            members,
            role: None,
            send_notification: false,
        }
    }

    pub fn with_role(mut self, role: TeamRole, send_notification: bool) -> Self {
        self.role = Some(role);
        self.send_notification = send_notification;
        self
    }
}

pub trait Backend: Send + Sync {
    fn recommendations(&self) -> Result<Vec<SearchResult>, BackendError>;

    fn search(&self, query: &SearchQuery) -> Result<SearchPage, BackendError>;

    fn load_import_enabled(&self) -> Result<bool, BackendError>;

    fn permission_status(&self) -> Result<PermissionStatus, BackendError>;

    /// Prompt for contact access and report the outcome
    fn request_contact_permissions(&self) -> Result<PermissionStatus, BackendError>;

    /// Returns the setting after the write
    fn set_import_enabled(&self, enable: bool) -> Result<bool, BackendError>;

    fn create_team(&self, request: &TeamRequest) -> Result<ConversationId, BackendError>;

    /// Re-read whatever backs this implementation
    fn reload(&self) -> Result<(), BackendError>;
}

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Backend, SearchPage, SearchQuery, TeamRequest};
use crate::contacts::PermissionStatus;
use crate::error::{BackendError, FixtureError};
use crate::model::serde_utils::duration_millis;
use crate::model::{ConversationId, SearchResult, ServiceId, TeamMember};

/// On-disk fixture: the demo directory of users plus contact settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureData {
    /// Artificial delay per call so loading states are visible
    #[serde(default, with = "duration_millis")]
    pub latency_ms: Duration,
    #[serde(default)]
    pub recommendations: Vec<SearchResult>,
    #[serde(default)]
    pub users: Vec<SearchResult>,
    #[serde(default)]
    pub contacts: FixtureContacts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureContacts {
    #[serde(default)]
    pub import_enabled: bool,
    #[serde(default)]
    pub permission: PermissionStatus,
}

// ============================================================================
// FUNCTIONAL CORE: matching and paging
// ============================================================================

/// Does `user` match the lowercased query under `service`.
/// Keybase also matches on username and full name.
fn matches(user: &SearchResult, needle: &str, service: ServiceId) -> bool {
    let handle_hit = user
        .services
        .get(&service)
        .is_some_and(|handle| handle.to_lowercase().contains(needle));

    match service {
        ServiceId::Keybase => {
            handle_hit
                || user.username.to_lowercase().contains(needle)
                || user.pretty_name.to_lowercase().contains(needle)
        }
        _ => handle_hit,
    }
}

/// Search the fixture directory.
///
/// Non-Keybase services without an exact handle hit get a synthetic
/// `handle@service` row so anyone on that service can still be added.
///
/// # Arguments
/// * `users` - Searchable user directory
/// * `query` - Text, service and page limit
///
/// # Returns
/// Page of at most `query.limit` results plus per-service match counts
pub fn search_fixture(users: &[SearchResult], query: &SearchQuery) -> SearchPage {
    let needle = query.text.trim().to_lowercase();
    if needle.is_empty() {
        return SearchPage::default();
    }

    let counts: BTreeMap<ServiceId, usize> = ServiceId::ALL
        .iter()
        .map(|service| {
            let n = users.iter().filter(|u| matches(u, &needle, *service)).count();
            (*service, n)
        })
        .collect();

    let mut results: Vec<SearchResult> = users
        .iter()
        .filter(|u| matches(u, &needle, query.service))
        .take(query.limit)
        .cloned()
        .collect();

    let exact_hit = results.iter().any(|u| {
        u.services
            .get(&query.service)
            .is_some_and(|h| h.eq_ignore_ascii_case(&needle))
    });
    if query.service != ServiceId::Keybase && !exact_hit && results.len() < query.limit {
        let raw = query.text.trim();
        results.push(
            SearchResult::new(format!("{}@{}", raw, query.service), raw)
                .with_display_label(format!("{} on {}", raw, query.service.label()))
                .with_service(query.service, raw),
        );
    }

    SearchPage { results, counts }
}

fn conversation_id_for(members: &[TeamMember]) -> ConversationId {
    let ids: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
    ConversationId::new(format!("conv:{}", ids.join(",")))
}

// ============================================================================
// IMPERATIVE SHELL: file loading and shared state
// ============================================================================

fn load_fixture(path: &Path) -> Result<FixtureData, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FixtureError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Backend serving users and settings from a JSON fixture file.
/// Writes (permission grants, import toggles) live in memory only.
#[derive(Debug)]
pub struct FixtureBackend {
    path: Option<PathBuf>,
    data: Mutex<FixtureData>,
}

impl FixtureBackend {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let path = path.into();
        let data = load_fixture(&path)?;
        tracing::info!(
            path = %path.display(),
            users = data.users.len(),
            recommendations = data.recommendations.len(),
            "fixture loaded"
        );
        Ok(Self {
            path: Some(path),
            data: Mutex::new(data),
        })
    }

    /// In-memory backend with nothing to reload
    pub fn from_data(data: FixtureData) -> Self {
        Self {
            path: None,
            data: Mutex::new(data),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, FixtureData>, BackendError> {
        self.data.lock().map_err(|_| BackendError::Poisoned)
    }

    /// Sleep for the configured latency, then lock
    fn delayed(&self) -> Result<MutexGuard<'_, FixtureData>, BackendError> {
        let latency = self.lock()?.latency_ms;
        if !latency.is_zero() {
            std::thread::sleep(latency);
        }
        self.lock()
    }
}

impl Backend for FixtureBackend {
    fn recommendations(&self) -> Result<Vec<SearchResult>, BackendError> {
        Ok(self.delayed()?.recommendations.clone())
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchPage, BackendError> {
        let data = self.delayed()?;
        Ok(search_fixture(&data.users, query))
    }

    fn load_import_enabled(&self) -> Result<bool, BackendError> {
        Ok(self.delayed()?.contacts.import_enabled)
    }

    fn permission_status(&self) -> Result<PermissionStatus, BackendError> {
        Ok(self.lock()?.contacts.permission)
    }

    fn request_contact_permissions(&self) -> Result<PermissionStatus, BackendError> {
        let mut data = self.delayed()?;
        // Nobody to ask in a fixture: undetermined becomes granted, denial sticks
        if data.contacts.permission == PermissionStatus::Undetermined {
            data.contacts.permission = PermissionStatus::Granted;
        }
        Ok(data.contacts.permission)
    }

    fn set_import_enabled(&self, enable: bool) -> Result<bool, BackendError> {
        let mut data = self.delayed()?;
        data.contacts.import_enabled = enable;
        Ok(enable)
    }

    fn create_team(&self, request: &TeamRequest) -> Result<ConversationId, BackendError> {
        let members = &request.members;
        if members.is_empty() {
            return Err(BackendError::EmptyTeam);
        }
        let data = self.delayed()?;
        let known = |m: &TeamMember| {
            m.service != ServiceId::Keybase
                || data
                    .users
                    .iter()
                    .chain(data.recommendations.iter())
                    .any(|u| u.user_id == m.user_id)
        };
        if let Some(missing) = members.iter().find(|m| !known(m)) {
            return Err(BackendError::UnknownUser(missing.user_id.to_string()));
        }
        if let Some(role) = request.role {
            let external = members.iter().find(|m| m.service != ServiceId::Keybase);
            if let (Some(member), false) = (external, role.allowed_for_external()) {
                return Err(BackendError::RoleNotAllowed {
                    role,
                    user: member.user_id.to_string(),
                });
            }
            tracing::info!(%role, notify = request.send_notification, "adding members with role");
        }
        Ok(conversation_id_for(members))
    }

    fn reload(&self) -> Result<(), BackendError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let fresh = load_fixture(path)?;
        *self.lock()? = fresh;
        tracing::info!(path = %path.display(), "fixture reloaded");
        Ok(())
    }
}

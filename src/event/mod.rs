use std::fmt;

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::backend::{SearchPage, SearchQuery};
use crate::contacts::PermissionStatus;
use crate::error::AppError;
use crate::model::{ConversationId, SearchResult};

/// Which collaborator an error came from, so update can unwind its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    Recommendations,
    Search,
    Contacts,
    CreateTeam,
    Fixtures,
    Watcher,
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorSource::Recommendations => "recommendations",
            ErrorSource::Search => "search",
            ErrorSource::Contacts => "contacts",
            ErrorSource::CreateTeam => "create team",
            ErrorSource::Fixtures => "fixtures",
            ErrorSource::Watcher => "watcher",
        };
        f.write_str(name)
    }
}

/// All events that can occur in the application.
/// Sourced from keyboard input, timers, the effect runner and the fixture watcher.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick (spinner animation)
    Tick(DateTime<Utc>),

    /// Recommendations fetched
    RecommendationsLoaded(Vec<SearchResult>),

    /// Search finished; dropped by update if the query is no longer current
    SearchCompleted { query: SearchQuery, page: SearchPage },

    /// Search failed; like completion, only the current query is affected
    SearchFailed { query: SearchQuery, error: AppError },

    /// Contact import setting loaded or changed
    ContactsImportLoaded(bool),

    /// Contact permission reported or changed
    ContactsPermissionChanged(PermissionStatus),

    /// Team conversation created
    TeamCreated {
        conversation: ConversationId,
        created_at: DateTime<Utc>,
    },

    /// Fixture file modified on disk
    FixturesChanged,

    /// Fixture file re-read into the backend
    FixturesReloaded,

    /// Error occurred (non-fatal)
    Error { source: ErrorSource, error: AppError },
}

//! Error types for team-builder-tui
//!
//! Domain-specific error enums using thiserror. The view-state resolver is
//! total and has none; everything here belongs to the collaborators around it.

use crate::model::TeamRole;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("I/O {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("fixture store lock poisoned")]
    Poisoned,
    #[error("cannot create an empty team")]
    EmptyTeam,
    #[error("unknown user: {0}")]
    UnknownUser(String),
    #[error("{user} cannot join as {role}")]
    RoleNotAllowed { role: TeamRole, user: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read flags file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid flags file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown story: {0}")]
    UnknownStory(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatcherError {
    #[error("notify: {0}")]
    Notify(String),
}

impl From<notify::Error> for WatcherError {
    fn from(e: notify::Error) -> Self {
        WatcherError::Notify(e.to_string())
    }
}

/// Cloneable error carried inside `AppEvent::Error`
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("backend: {0}")]
    Backend(String),
    #[error(transparent)]
    Watcher(#[from] WatcherError),
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        AppError::Backend(e.to_string())
    }
}

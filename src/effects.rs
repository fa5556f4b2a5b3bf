//! Side effects requested by `update` and executed off the UI thread.
//!
//! `update` never talks to the backend. It queues an `Effect`; the main loop
//! drains the queue and hands each effect to `spawn_effect`, which reports
//! back through the same channel the watcher uses.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use chrono::Utc;

use crate::backend::{Backend, SearchQuery, TeamRequest};
use crate::contacts::{ContactsAction, PermissionStatus};
use crate::error::AppError;
use crate::event::{AppEvent, ErrorSource};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchRecommendations,
    Search(SearchQuery),
    Contacts(ContactsAction),
    CreateTeam(TeamRequest),
    ReloadFixtures,
}

fn failed(source: ErrorSource, error: impl Into<AppError>) -> AppEvent {
    let error = error.into();
    tracing::warn!(%source, %error, "effect failed");
    AppEvent::Error { source, error }
}

fn run_contacts(action: ContactsAction, backend: &dyn Backend) -> Vec<AppEvent> {
    let mut events = Vec::new();
    match action {
        ContactsAction::LoadImportEnabled => {
            match backend.permission_status() {
                Ok(status) => events.push(AppEvent::ContactsPermissionChanged(status)),
                Err(e) => events.push(failed(ErrorSource::Contacts, e)),
            }
            match backend.load_import_enabled() {
                Ok(enabled) => events.push(AppEvent::ContactsImportLoaded(enabled)),
                Err(e) => events.push(failed(ErrorSource::Contacts, e)),
            }
        }
        ContactsAction::RequestPermissions {
            then_toggle_import_on,
        } => match backend.request_contact_permissions() {
            Ok(status) => {
                events.push(AppEvent::ContactsPermissionChanged(status));
                if then_toggle_import_on && status == PermissionStatus::Granted {
                    events.extend(run_contacts(
                        ContactsAction::EditImportEnabled { enable: true },
                        backend,
                    ));
                }
            }
            Err(e) => events.push(failed(ErrorSource::Contacts, e)),
        },
        ContactsAction::EditImportEnabled { enable } => {
            match backend.set_import_enabled(enable) {
                Ok(enabled) => events.push(AppEvent::ContactsImportLoaded(enabled)),
                Err(e) => events.push(failed(ErrorSource::Contacts, e)),
            }
        }
    }
    events
}

/// Execute one effect synchronously and return the events it produced
pub fn run_effect(effect: Effect, backend: &dyn Backend) -> Vec<AppEvent> {
    match effect {
        Effect::FetchRecommendations => match backend.recommendations() {
            Ok(recs) => vec![AppEvent::RecommendationsLoaded(recs)],
            Err(e) => vec![failed(ErrorSource::Recommendations, e)],
        },
        Effect::Search(query) => match backend.search(&query) {
            Ok(page) => vec![AppEvent::SearchCompleted { query, page }],
            Err(e) => {
                let error = AppError::from(e);
                tracing::warn!(query = %query.text, service = %query.service, %error, "search failed");
                vec![AppEvent::SearchFailed { query, error }]
            }
        },
        Effect::Contacts(action) => run_contacts(action, backend),
        Effect::CreateTeam(request) => match backend.create_team(&request) {
            Ok(conversation) => vec![AppEvent::TeamCreated {
                conversation,
                created_at: Utc::now(),
            }],
            Err(e) => vec![failed(ErrorSource::CreateTeam, e)],
        },
        Effect::ReloadFixtures => match backend.reload() {
            Ok(()) => vec![AppEvent::FixturesReloaded],
            Err(e) => vec![failed(ErrorSource::Fixtures, e)],
        },
    }
}

/// Run an effect on a worker thread, forwarding its events to `tx`
pub fn spawn_effect(effect: Effect, backend: Arc<dyn Backend>, tx: Sender<AppEvent>) {
    tracing::debug!(?effect, "spawning effect");
    std::thread::spawn(move || {
        for event in run_effect(effect, backend.as_ref()) {
            if tx.send(event).is_err() {
                tracing::debug!("event channel closed, dropping effect result");
                return;
            }
        }
    });
}

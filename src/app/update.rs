use crate::app::{handle_key, AppState};
use crate::effects::Effect;
use crate::event::{AppEvent, ErrorSource};

/// Update function following Elm Architecture.
/// No I/O: backend work is queued as effects for the main loop.
pub fn update(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(state, key),

        AppEvent::Tick(_) => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
        }

        AppEvent::RecommendationsLoaded(recs) => {
            tracing::debug!(count = recs.len(), "recommendations loaded");
            state.recommendations = Some(recs);
            state.clamp_highlight();
        }

        AppEvent::SearchCompleted { query, page } => {
            if !state.is_current_query(&query) {
                tracing::debug!(query = %query.text, service = %query.service, limit = query.limit, "dropping stale search results");
            } else {
                for (service, count) in page.counts {
                    state.service_result_count.insert(service, Some(count));
                }
                state.search_results = Some(page.results);
                state.clamp_highlight();
            }
        }

        AppEvent::ContactsImportLoaded(enabled) => state.contacts.loaded(enabled),

        AppEvent::ContactsPermissionChanged(status) => state.contacts.permission = status,

        AppEvent::TeamCreated {
            conversation,
            created_at,
        } => {
            tracing::info!(%conversation, %created_at, members = state.team_so_far.len(), "team created");
            state.waiting_for_create = false;
            state.created = Some(conversation);
            state.should_quit = true;
        }

        AppEvent::FixturesChanged => state.push_effect(Effect::ReloadFixtures),

        AppEvent::FixturesReloaded => {
            state.push_effect(Effect::FetchRecommendations);
            if !state.search_string.is_empty() {
                let query = state.current_query();
                state.push_effect(Effect::Search(query));
            }
        }

        AppEvent::SearchFailed { query, error } => {
            if state.is_current_query(&query) {
                // Stop the spinner; the list shows "no matches" with the error in the footer
                state.search_results.get_or_insert_with(Vec::new);
                state.clamp_highlight();
            } else {
                tracing::debug!(query = %query.text, service = %query.service, "ignoring stale search failure");
            }
            state.push_error(format!("{}: {}", ErrorSource::Search, error));
        }

        AppEvent::Error { source, error } => {
            match source {
                ErrorSource::Recommendations => {
                    // Leave pending so the list can show "no matches" instead of spinning
                    state.recommendations.get_or_insert_with(Vec::new);
                }
                ErrorSource::Contacts => state.contacts.load_failed(),
                ErrorSource::CreateTeam => state.waiting_for_create = false,
                ErrorSource::Search | ErrorSource::Fixtures | ErrorSource::Watcher => {}
            }
            state.push_error(format!("{}: {}", source, error));
            state.clamp_highlight();
        }
    }

    // Re-evaluated after every event; the store guards against repeat loads
    let (flags, platform) = (state.flags, state.platform);
    if let Some(action) = state.contacts.poll(&flags, platform) {
        state.push_effect(Effect::Contacts(action));
    }
}

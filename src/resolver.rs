//! View-state resolution for the team-building screen.
//!
//! Picks exactly one body state from a snapshot of loosely related inputs.
//! Rules are tried top to bottom and the first match wins:
//!
//! | # | Predicate                                                              | State                    |
//! |---|------------------------------------------------------------------------|--------------------------|
//! | 1 | query empty and recommendations absent                                 | `RecommendationsPending` |
//! | 2 | query non-empty and search results absent                              | `SearchLoading`          |
//! | 3 | not showing recs, no service result count, a service is selected       | `EmptyServicePrompt`     |
//! | 4 | always                                                                 | `ResultsList`            |
//!
//! Pending and loading come first so an in-flight fetch hides stale
//! "no results" messaging. The create-waiting overlay is reported next to
//! whichever state wins.

use crate::model::{SearchResult, ServiceId};

/// Inputs for one evaluation. Built fresh per render, borrows from app state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewInputSnapshot<'a> {
    pub search_string: &'a str,
    /// `None` until loaded; `Some(&[])` is a loaded, empty list
    pub recommendations: Option<&'a [SearchResult]>,
    /// `None` while the active query is in flight
    pub search_results: Option<&'a [SearchResult]>,
    pub show_recs: bool,
    pub show_service_result_count: bool,
    pub selected_service: Option<ServiceId>,
    pub waiting_for_create: bool,
}

impl Default for ViewInputSnapshot<'_> {
    fn default() -> Self {
        Self {
            search_string: "",
            recommendations: None,
            search_results: None,
            show_recs: false,
            show_service_result_count: false,
            selected_service: None,
            waiting_for_create: false,
        }
    }
}

/// Body state to render. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    RecommendationsPending,
    SearchLoading,
    EmptyServicePrompt { service: ServiceId },
    /// May be empty: the renderer shows "no matches", never a spinner
    ResultsList { items: &'a [SearchResult] },
}

impl ViewState<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::RecommendationsPending => "recommendations_pending",
            ViewState::SearchLoading => "search_loading",
            ViewState::EmptyServicePrompt { .. } => "empty_service_prompt",
            ViewState::ResultsList { .. } => "results_list",
        }
    }

    /// Both pending and loading render the same spinner
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::RecommendationsPending | ViewState::SearchLoading)
    }
}

/// Resolver output: base state plus the independent waiting overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub view: ViewState<'a>,
    pub is_create_waiting: bool,
}

type Rule = for<'a> fn(&ViewInputSnapshot<'a>) -> Option<ViewState<'a>>;

/// Ordered rules. `ResultsList` is the fallback after these.
const RULES: [Rule; 3] = [recommendations_pending, search_loading, empty_service_prompt];

fn recommendations_pending<'a>(s: &ViewInputSnapshot<'a>) -> Option<ViewState<'a>> {
    (s.search_string.is_empty() && s.recommendations.is_none())
        .then_some(ViewState::RecommendationsPending)
}

fn search_loading<'a>(s: &ViewInputSnapshot<'a>) -> Option<ViewState<'a>> {
    (!s.search_string.is_empty() && s.search_results.is_none()).then_some(ViewState::SearchLoading)
}

fn empty_service_prompt<'a>(s: &ViewInputSnapshot<'a>) -> Option<ViewState<'a>> {
    if s.show_recs || s.show_service_result_count {
        return None;
    }
    s.selected_service
        .map(|service| ViewState::EmptyServicePrompt { service })
}

fn results_list<'a>(s: &ViewInputSnapshot<'a>) -> ViewState<'a> {
    let source = if s.show_recs {
        s.recommendations
    } else {
        s.search_results
    };
    ViewState::ResultsList {
        items: source.unwrap_or(&[]),
    }
}

/// Pure and total: every snapshot maps to exactly one state.
pub fn resolve(snapshot: ViewInputSnapshot<'_>) -> Resolution<'_> {
    let view = RULES
        .iter()
        .find_map(|rule| rule(&snapshot))
        .unwrap_or_else(|| results_list(&snapshot));

    Resolution {
        view,
        is_create_waiting: snapshot.waiting_for_create,
    }
}

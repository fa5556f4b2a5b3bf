use team_builder_tui::model::{SearchResult, ServiceId};
use team_builder_tui::resolver::{resolve, ViewInputSnapshot, ViewState};

/// Integration tests for view-state resolution.
/// Cover ordering guarantees across the whole input space.

fn users(ids: &[&str]) -> Vec<SearchResult> {
    ids.iter().map(|id| SearchResult::new(*id, *id)).collect()
}

#[test]
fn in_flight_search_hides_empty_results() {
    // Stale "no results" must never show while the next query loads
    let snapshot = ViewInputSnapshot {
        search_string: "ali",
        recommendations: Some(&[]),
        search_results: None,
        show_recs: false,
        show_service_result_count: false,
        selected_service: Some(ServiceId::Keybase),
        waiting_for_create: false,
    };
    assert_eq!(resolve(snapshot).view, ViewState::SearchLoading);
}

#[test]
fn pending_recommendations_win_over_everything() {
    let results = users(&["bob"]);
    for service in [None, Some(ServiceId::Keybase), Some(ServiceId::Github)] {
        for flag in [false, true] {
            let snapshot = ViewInputSnapshot {
                search_string: "",
                recommendations: None,
                search_results: Some(&results),
                show_recs: flag,
                show_service_result_count: flag,
                selected_service: service,
                waiting_for_create: flag,
            };
            assert_eq!(resolve(snapshot).view, ViewState::RecommendationsPending);
        }
    }
}

#[test]
fn empty_service_prompt_names_selected_service() {
    let snapshot = ViewInputSnapshot {
        search_string: "",
        recommendations: Some(&[]),
        selected_service: Some(ServiceId::Reddit),
        ..Default::default()
    };
    assert_eq!(
        resolve(snapshot).view,
        ViewState::EmptyServicePrompt {
            service: ServiceId::Reddit
        }
    );
}

#[test]
fn no_service_selected_falls_back_to_list() {
    let recs = users(&["alice"]);
    let snapshot = ViewInputSnapshot {
        search_string: "",
        recommendations: Some(&recs),
        selected_service: None,
        ..Default::default()
    };
    assert!(matches!(
        resolve(snapshot).view,
        ViewState::ResultsList { items } if items.is_empty()
    ));
}

#[test]
fn recommendation_mode_lists_recommendations() {
    let recs = users(&["alice", "bob"]);
    let stale = users(&["zed"]);
    let snapshot = ViewInputSnapshot {
        search_string: "",
        recommendations: Some(&recs),
        search_results: Some(&stale),
        show_recs: true,
        selected_service: Some(ServiceId::Keybase),
        ..Default::default()
    };
    match resolve(snapshot).view {
        ViewState::ResultsList { items } => {
            let ids: Vec<_> = items.iter().map(|u| u.user_id.as_str()).collect();
            assert_eq!(ids, ["alice", "bob"]);
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn search_mode_lists_search_results() {
    let recs = users(&["alice"]);
    let results = users(&["bob"]);
    let snapshot = ViewInputSnapshot {
        search_string: "bo",
        recommendations: Some(&recs),
        search_results: Some(&results),
        show_service_result_count: true,
        selected_service: Some(ServiceId::Keybase),
        ..Default::default()
    };
    assert!(matches!(
        resolve(snapshot).view,
        ViewState::ResultsList { items } if items.len() == 1 && items[0].username == "bob"
    ));
}

#[test]
fn every_combination_resolves_and_overlay_tracks_waiting() {
    let some = users(&["x"]);
    let texts = ["", "q"];
    let lists: [Option<&[SearchResult]>; 3] = [None, Some(&[]), Some(some.as_slice())];
    let services = [None, Some(ServiceId::Keybase), Some(ServiceId::Email)];

    for text in texts {
        for recs in lists {
            for results in lists {
                for service in services {
                    for bits in 0..8u8 {
                        let snapshot = ViewInputSnapshot {
                            search_string: text,
                            recommendations: recs,
                            search_results: results,
                            show_recs: bits & 1 != 0,
                            show_service_result_count: bits & 2 != 0,
                            selected_service: service,
                            waiting_for_create: bits & 4 != 0,
                        };
                        let resolution = resolve(snapshot);
                        assert_eq!(resolution.is_create_waiting, snapshot.waiting_for_create);

                        // Overlay never changes the base state
                        let mut flipped = snapshot;
                        flipped.waiting_for_create = !flipped.waiting_for_create;
                        assert_eq!(resolve(flipped).view, resolution.view);

                        if text.is_empty() && recs.is_none() {
                            assert_eq!(resolution.view, ViewState::RecommendationsPending);
                        } else if !text.is_empty() && results.is_none() {
                            assert_eq!(resolution.view, ViewState::SearchLoading);
                        } else {
                            assert!(!resolution.view.is_loading());
                        }
                    }
                }
            }
        }
    }
}

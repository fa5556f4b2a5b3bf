//! Fixture file watcher.
//!
//! Watches the fixture's parent directory so editors that replace the file
//! (write to temp, rename) are still noticed. Only events touching the
//! fixture itself are forwarded.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::WatcherError;
use crate::event::{AppEvent, ErrorSource};

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Start watching `fixture`. Drop the returned watcher to stop.
pub fn watch_fixture(fixture: &Path, tx: Sender<AppEvent>) -> WatcherResult<RecommendedWatcher> {
    let target = absolute(fixture);
    let dir = target
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| WatcherError::Notify(format!("no parent dir: {}", target.display())))?;

    let watched = target.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| handle_watch_event(res, &watched, &tx),
        Config::default().with_poll_interval(Duration::from_millis(200)),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    tracing::info!(path = %target.display(), "watching fixture");
    Ok(watcher)
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// True when a notify event should trigger a reload of `fixture`
pub fn is_fixture_change(event: &notify::Event, fixture: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    relevant && event.paths.iter().any(|p| same_file_name(p, fixture))
}

fn same_file_name(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    // Some backends report canonical paths; compare parents the same way
    let parent = |p: &Path| p.parent().and_then(|d| d.canonicalize().ok());
    a.file_name() == b.file_name() && parent(a).is_some() && parent(a) == parent(b)
}

fn handle_watch_event(
    res: Result<notify::Event, notify::Error>,
    fixture: &Path,
    tx: &Sender<AppEvent>,
) {
    let event = match res {
        Ok(event) if is_fixture_change(&event, fixture) => AppEvent::FixturesChanged,
        Ok(_) => return,
        Err(e) => AppEvent::Error {
            source: ErrorSource::Watcher,
            error: WatcherError::from(e).into(),
        },
    };
    // Receiver gone means the app is shutting down
    let _ = tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};
    use std::sync::mpsc;

    fn event(kind: EventKind, path: &Path) -> notify::Event {
        notify::Event::new(kind).add_path(path.to_path_buf())
    }

    #[test]
    fn modify_of_fixture_is_a_change() {
        let path = Path::new("/tmp/fx/users.json");
        let ev = event(EventKind::Modify(ModifyKind::Data(DataChange::Content)), path);
        assert!(is_fixture_change(&ev, path));
    }

    #[test]
    fn create_of_fixture_is_a_change() {
        let path = Path::new("/tmp/fx/users.json");
        let ev = event(EventKind::Create(CreateKind::File), path);
        assert!(is_fixture_change(&ev, path));
    }

    #[test]
    fn sibling_files_are_ignored() {
        let fixture = Path::new("/tmp/fx/users.json");
        let ev = event(
            EventKind::Modify(ModifyKind::Any),
            Path::new("/tmp/fx/other.json"),
        );
        assert!(!is_fixture_change(&ev, fixture));
    }

    #[test]
    fn removal_is_ignored() {
        let path = Path::new("/tmp/fx/users.json");
        let ev = event(EventKind::Remove(RemoveKind::File), path);
        assert!(!is_fixture_change(&ev, path));
    }

    #[test]
    fn notify_error_becomes_watcher_error_event() {
        let (tx, rx) = mpsc::channel();
        handle_watch_event(
            Err(notify::Error::generic("boom")),
            Path::new("/tmp/fx/users.json"),
            &tx,
        );
        match rx.try_recv().unwrap() {
            AppEvent::Error { source, .. } => assert_eq!(source, ErrorSource::Watcher),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn unrelated_event_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let path = Path::new("/tmp/fx/users.json");
        handle_watch_event(
            Ok(event(EventKind::Modify(ModifyKind::Any), Path::new("/tmp/fx/x"))),
            path,
            &tx,
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn watch_fixture_starts_on_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{}").unwrap();
        let (tx, _rx) = mpsc::channel();
        assert!(watch_fixture(&path, tx).is_ok());
    }

    #[test]
    fn watch_fixture_fails_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("users.json");
        let (tx, _rx) = mpsc::channel();
        assert!(watch_fixture(&path, tx).is_err());
    }
}

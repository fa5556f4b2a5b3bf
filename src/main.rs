use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use team_builder_tui::{
    app::{update, AppState},
    backend::{Backend, FixtureBackend},
    config::{load_flags, Cli},
    effects::{spawn_effect, Effect},
    error::ConfigError,
    event::AppEvent,
    logging, stories,
    view::render,
    watcher,
};

fn main() -> Result<()> {
    // Install color-eyre panic handler for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    let flags = load_flags(cli.flags.as_deref())?;

    if cli.list_stories {
        for story in stories::registry(cli.platform) {
            println!("{:<16} {}", story.name, story.description);
        }
        return Ok(());
    }

    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Story mode renders a canned state with no backend behind it
    let (mut state, backend, _watcher) = match &cli.story {
        Some(name) => {
            let story = stories::find(name, cli.platform)
                .ok_or_else(|| ConfigError::UnknownStory(name.clone()))?;
            tracing::info!(story = story.name, platform = ?cli.platform, "rendering story");
            let mut state = story.build(cli.platform);
            state.flags = flags;
            (state, None, None)
        }
        None => {
            let fixture = FixtureBackend::open(&cli.fixtures)?;
            let backend: Arc<dyn Backend> = Arc::new(fixture);
            let watcher = watcher::watch_fixture(&cli.fixtures, tx.clone())
                .map_err(|e| eyre!("Failed to start fixture watcher: {}", e))?;

            let mut state = AppState::new()
                .with_platform(cli.platform)
                .with_flags(flags)
                .with_service(cli.service);
            if let Some(picker) = cli.initial_role_picker() {
                state = state.with_role_picker(picker);
            }
            state.push_effect(Effect::FetchRecommendations);
            (state, Some(backend), Some(watcher))
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_event_loop(
        &mut terminal,
        &mut state,
        &rx,
        &tx,
        backend.as_ref(),
        Duration::from_millis(250),
    );

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if let Some(conversation) = &state.created {
        println!("{}", conversation);
    }
    Ok(())
}

/// Hand queued effects to worker threads. Without a backend they are dropped.
fn dispatch_effects(state: &mut AppState, backend: Option<&Arc<dyn Backend>>, tx: &Sender<AppEvent>) {
    for effect in state.take_effects() {
        match backend {
            Some(backend) => spawn_effect(effect, Arc::clone(backend), tx.clone()),
            None => tracing::debug!(?effect, "no backend, dropping effect"),
        }
    }
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    rx: &Receiver<AppEvent>,
    tx: &Sender<AppEvent>,
    backend: Option<&Arc<dyn Backend>>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        dispatch_effects(state, backend, tx);

        terminal.draw(|frame| {
            render(state, frame);
        })?;

        // Poll keyboard events with timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                update(state, AppEvent::Key(key));
            }
        }

        // Drain effect results and watcher events
        while let Ok(event) = rx.try_recv() {
            update(state, event);
        }

        if last_tick.elapsed() >= tick_rate {
            update(state, AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

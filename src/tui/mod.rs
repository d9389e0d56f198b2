//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (landing page, loading): draws every ~80ms for the
//!   pulsing prompt and the spinner.
//! - **Idle** (browsing): sleeps up to 500ms, only redraws on events,
//!   terminal resize or actions from the background load.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::Hide;
use crossterm::event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{NavigationState, Page, View};
use crate::core::speech::{NoopSpeaker, Speaker, build_speaker};
use crate::core::state::{App, LoadStatus};
use crate::core::view::ViewBody;
use crate::data::{Collection, HttpFetcher, JsonSource, Sources, load_all};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardGridState, GridEvent, WordListEvent, WordListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub grid: CardGridState,
    pub words: WordListState,
    /// Navigation as of the last sync; a change resets the selection.
    pub shown: NavigationState,
    // Animation state
    pub pulse_value: f32,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: CardGridState::new(),
            words: WordListState::new(),
            shown: NavigationState::new(),
            pulse_value: 0.0,
        }
    }

    /// Reset component state after navigation moved. Going back re-selects
    /// the card the user came from.
    pub fn sync_with(&mut self, app: &App) {
        if self.shown == app.nav {
            return;
        }
        let previous = self.shown;
        self.shown = app.nav;
        self.grid.reset();
        self.words.reset();

        let selector = match (previous.view(), app.nav.view()) {
            (View::Units, View::Levels) => previous.level(),
            (View::Words, View::Units) => previous.unit(),
            (View::Levels, View::Collections) => previous
                .collection()
                .and_then(|c| Collection::ALL.iter().position(|&x| x == c)),
            _ => None,
        };
        let Some(selector) = selector else {
            return;
        };
        if app.nav.view() == View::Collections {
            self.grid.selected = selector;
            return;
        }
        if let Ok(vm) = app.current_view()
            && let Some(position) = ui::position_of(&vm.body, app.nav.view(), selector)
        {
            self.grid.selected = position;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Report key releases so they can be filtered; ignored by terminals
        // without the protocol
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
}

/// Pick the speaker for a resolved config.
pub fn build_configured_speaker(config: &ResolvedConfig) -> Arc<dyn Speaker> {
    if config.speech_enabled {
        build_speaker(config.speech_command.as_deref(), config.speech_rate)
    } else {
        info!("Speech disabled");
        Arc::new(NoopSpeaker)
    }
}

/// Map a grid selection in the current view to the action that opens it.
fn open_action(body: &ViewBody, position: usize) -> Option<Action> {
    match body {
        ViewBody::Collections(cards) => cards.get(position).map(|c| Action::OpenCollection(c.collection)),
        ViewBody::Levels(cards) => cards.get(position).map(|c| Action::OpenLevel(c.level)),
        ViewBody::Units(cards) => cards.get(position).map(|c| Action::OpenUnit(c.unit)),
        ViewBody::Words(_) => None,
    }
}

/// Translate one input event into at most one core action, letting the
/// focused component consume what it owns.
fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Home => return Some(Action::Home),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if app.page == Page::Landing {
        return match event {
            TuiEvent::Submit => Some(Action::StartLearning),
            _ => None,
        };
    }

    match event {
        TuiEvent::Escape => return Some(Action::Back),
        TuiEvent::Retry if matches!(app.load, LoadStatus::Failed(_)) => return Some(Action::Retry),
        _ => {}
    }
    if app.load != LoadStatus::Idle {
        return None;
    }

    let vm = app.current_view().ok()?;
    match &vm.body {
        ViewBody::Words(_) => match tui.words.handle_event(&event)? {
            WordListEvent::Speak(text) => Some(Action::Speak(text)),
        },
        body => match tui.grid.handle_event(&event)? {
            GridEvent::Open(position) => open_action(body, position),
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let speaker = build_configured_speaker(&config);
    info!("Using speaker: {}", speaker.name());
    let mut app = App::from_config(speaker, &config);
    let mut tui = TuiState::new();
    let source: Arc<dyn JsonSource> = Arc::new(HttpFetcher::new(config.retry));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.page == Page::Landing || app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.sync_with(&app);
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 3.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&app, &mut tui, event) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::StartLoad => spawn_load(source.clone(), app.sources.clone(), tx.clone()),
                Effect::None => {}
            }
            // Components see the new view before the next event in the batch
            tui.sync_with(&app);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (loaded pairs, load outcome)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::StartLoad => spawn_load(source.clone(), app.sources.clone(), tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run the full load in the background, reporting each pair and the
/// outcome back over the action channel.
fn spawn_load(source: Arc<dyn JsonSource>, sources: Sources, tx: mpsc::Sender<Action>) {
    info!("Spawning data load");
    tokio::spawn(async move {
        let pair_tx = tx.clone();
        let result = load_all(source.as_ref(), &sources, move |collection, pair| {
            if pair_tx
                .send(Action::PairLoaded(collection, Box::new(pair)))
                .is_err()
            {
                warn!("Failed to send {} pair: receiver dropped", collection);
            }
        })
        .await;

        let outcome = result.map_err(|e| {
            warn!("Data load failed: {}", e);
            e.user_message()
        });
        if tx.send(Action::LoadFinished(outcome)).is_err() {
            warn!("Failed to send load outcome: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{loaded_app, test_app};

    fn learning_app() -> App {
        let mut app = loaded_app();
        app.page = Page::Learning;
        app
    }

    #[test]
    fn test_enter_on_landing_starts_learning() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&app, &mut tui, TuiEvent::Submit),
            Some(Action::StartLearning)
        ));
        assert!(route_event(&app, &mut tui, TuiEvent::Escape).is_none());
    }

    #[test]
    fn test_grid_submit_opens_selected_collection() {
        let app = learning_app();
        let mut tui = TuiState::new();
        tui.grid.set_len(2);
        tui.grid.handle_event(&TuiEvent::CursorRight);
        assert!(matches!(
            route_event(&app, &mut tui, TuiEvent::Submit),
            Some(Action::OpenCollection(Collection::Essential))
        ));
    }

    #[test]
    fn test_speak_keys_only_in_words_view() {
        let mut app = learning_app();
        let mut tui = TuiState::new();
        assert!(route_event(&app, &mut tui, TuiEvent::SpeakWord).is_none());

        app.nav.go_to_words(Collection::Beginner, 0, 0);
        tui.sync_with(&app);
        // The word list learns its cards on render; draw once
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, 0)).unwrap();

        match route_event(&app, &mut tui, TuiEvent::SpeakWord) {
            Some(Action::Speak(text)) => assert!(!text.is_empty()),
            other => panic!("expected speak, got {:?}", other),
        }
    }

    #[test]
    fn test_retry_only_when_failed() {
        let mut app = learning_app();
        let mut tui = TuiState::new();
        assert!(route_event(&app, &mut tui, TuiEvent::Retry).is_none());
        app.load = LoadStatus::Failed("Failed to load data".to_string());
        assert!(matches!(route_event(&app, &mut tui, TuiEvent::Retry), Some(Action::Retry)));
    }

    #[test]
    fn test_quit_and_home_route_everywhere() {
        let app = learning_app();
        let mut tui = TuiState::new();
        assert!(matches!(route_event(&app, &mut tui, TuiEvent::ForceQuit), Some(Action::Quit)));
        assert!(matches!(route_event(&app, &mut tui, TuiEvent::Home), Some(Action::Home)));
    }

    #[test]
    fn test_back_reselects_parent_card() {
        let mut app = learning_app();
        let mut tui = TuiState::new();
        app.nav.go_to_units(Collection::Essential, 1);
        tui.sync_with(&app);
        app.nav.go_back();
        tui.sync_with(&app);
        assert_eq!(tui.grid.selected, 1);

        app.nav.go_back();
        tui.sync_with(&app);
        // Essential is second in the collections grid
        assert_eq!(tui.grid.selected, 1);
    }
}

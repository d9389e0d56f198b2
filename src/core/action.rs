//! # Actions
//!
//! Everything that can happen in lexitree becomes an `Action`.
//! User opens a unit? That's `Action::OpenUnit(index)`.
//! A collection pair arrives? That's `Action::PairLoaded(collection, pair)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` for the adapter to carry out.
//! No I/O happens here, apart from handing text to the speaker.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::navigation::{Page, View};
use crate::core::state::{App, LoadStatus};
use crate::data::{Collection, CollectionPair};

#[derive(Debug)]
pub enum Action {
    /// Enter the learning area; loads data on first entry.
    StartLearning,
    /// Re-run the full load after a failure.
    Retry,
    OpenCollection(Collection),
    OpenLevel(usize),
    OpenUnit(usize),
    /// Escape: parent view.
    Back,
    /// Ctrl+H: back to the landing page.
    Home,
    PairLoaded(Collection, Box<CollectionPair>),
    /// Outcome of the whole load. `Err` carries the user-facing message.
    LoadFinished(Result<(), String>),
    Speak(String),
    Quit,
}

/// What the adapter must do after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the background load.
    StartLoad,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::StartLearning => {
            app.page = Page::Learning;
            begin_learning(app)
        }
        Action::Retry => {
            if app.page != Page::Learning || app.is_loading() {
                return Effect::None;
            }
            info!("Retrying data load");
            start_load(app)
        }
        Action::OpenCollection(collection) => {
            if app.page == Page::Learning {
                app.nav.go_to_levels(collection);
            }
            Effect::None
        }
        Action::OpenLevel(level) => {
            if let (View::Levels, Some(c)) = (app.nav.view(), app.nav.collection()) {
                app.nav.go_to_units(c, level);
            }
            Effect::None
        }
        Action::OpenUnit(unit) => {
            if let (View::Units, Some(c), Some(l)) = (app.nav.view(), app.nav.collection(), app.nav.level()) {
                app.nav.go_to_words(c, l, unit);
            }
            Effect::None
        }
        Action::Back => {
            if app.page == Page::Learning && app.nav.can_go_back() {
                app.nav.go_back();
                debug!("Navigated back to {:?}", app.nav.view());
            }
            Effect::None
        }
        Action::Home => {
            app.page = Page::Landing;
            Effect::None
        }
        Action::PairLoaded(collection, pair) => {
            app.store.insert_pair(collection, *pair);
            Effect::None
        }
        Action::LoadFinished(Ok(())) => {
            app.load = LoadStatus::Idle;
            app.status_message = "All data loaded".to_string();
            app.nav.go_to_collections();
            Effect::None
        }
        Action::LoadFinished(Err(message)) => {
            warn!("Load failed: {}", message);
            app.load = LoadStatus::Failed(message);
            app.status_message = "Press r to retry".to_string();
            Effect::None
        }
        Action::Speak(text) => {
            app.speaker.speak(&text, &app.speech_locale);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin_learning(app: &mut App) -> Effect {
    if app.store.is_loaded() {
        app.nav.go_to_collections();
        return Effect::None;
    }
    if app.is_loading() {
        return Effect::None;
    }
    start_load(app)
}

fn start_load(app: &mut App) -> Effect {
    app.load = LoadStatus::Loading;
    app.status_message = "Loading...".to_string();
    Effect::StartLoad
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::NavigationState;
    use crate::test_support::{RecordingSpeaker, loaded_app, test_app};
    use std::sync::Arc;

    #[test]
    fn test_start_learning_triggers_load_once() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::StartLearning), Effect::StartLoad);
        assert_eq!(app.page, Page::Learning);
        assert!(app.is_loading());

        // Still loading: no second load.
        assert_eq!(update(&mut app, Action::StartLearning), Effect::None);
    }

    #[test]
    fn test_start_learning_with_data_skips_load() {
        let mut app = loaded_app();
        app.nav.go_to_levels(Collection::Essential);
        assert_eq!(update(&mut app, Action::StartLearning), Effect::None);
        assert_eq!(app.nav, NavigationState::new());
    }

    #[test]
    fn test_load_success_shows_collections() {
        let mut app = test_app();
        update(&mut app, Action::StartLearning);
        update(
            &mut app,
            Action::PairLoaded(Collection::Essential, Box::default()),
        );
        update(
            &mut app,
            Action::PairLoaded(Collection::Beginner, Box::default()),
        );
        assert_eq!(update(&mut app, Action::LoadFinished(Ok(()))), Effect::None);
        assert_eq!(app.load, LoadStatus::Idle);
        assert!(app.store.is_loaded());
        assert_eq!(app.nav.view(), View::Collections);
    }

    #[test]
    fn test_load_failure_then_retry() {
        let mut app = test_app();
        update(&mut app, Action::StartLearning);
        update(&mut app, Action::PairLoaded(Collection::Essential, Box::default()));
        update(&mut app, Action::LoadFinished(Err("offline".to_string())));

        assert_eq!(app.load, LoadStatus::Failed("offline".to_string()));
        // Partial data is kept.
        assert!(app.store.is_collection_loaded(Collection::Essential));

        assert_eq!(update(&mut app, Action::Retry), Effect::StartLoad);
        assert!(app.is_loading());
    }

    #[test]
    fn test_retry_ignored_outside_learning() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Retry), Effect::None);
    }

    #[test]
    fn test_drill_down_and_back() {
        let mut app = loaded_app();
        update(&mut app, Action::StartLearning);
        update(&mut app, Action::OpenCollection(Collection::Beginner));
        update(&mut app, Action::OpenLevel(1));
        update(&mut app, Action::OpenUnit(2));
        assert_eq!(app.nav.view(), View::Words);
        assert_eq!((app.nav.level(), app.nav.unit()), (Some(1), Some(2)));

        update(&mut app, Action::Back);
        assert_eq!(app.nav.view(), View::Units);
        update(&mut app, Action::Back);
        update(&mut app, Action::Back);
        assert_eq!(app.nav.view(), View::Collections);
        update(&mut app, Action::Back);
        assert_eq!(app.nav.view(), View::Collections);
    }

    #[test]
    fn test_open_actions_need_the_right_view() {
        let mut app = loaded_app();
        update(&mut app, Action::StartLearning);
        update(&mut app, Action::OpenUnit(3));
        assert_eq!(app.nav.view(), View::Collections);
        update(&mut app, Action::OpenLevel(0));
        assert_eq!(app.nav.view(), View::Collections);
    }

    #[test]
    fn test_home_returns_to_landing_keeping_view() {
        let mut app = loaded_app();
        update(&mut app, Action::StartLearning);
        update(&mut app, Action::OpenCollection(Collection::Essential));
        update(&mut app, Action::Home);
        assert_eq!(app.page, Page::Landing);

        // Back does nothing on the landing page.
        update(&mut app, Action::Back);
        assert_eq!(app.nav.view(), View::Levels);
    }

    #[test]
    fn test_speak_uses_configured_locale() {
        let speaker = Arc::new(RecordingSpeaker::default());
        let mut app = test_app();
        app.speaker = speaker.clone();
        app.speech_locale = "en-GB".to_string();

        update(&mut app, Action::Speak("abandon".to_string()));
        assert_eq!(
            speaker.spoken(),
            vec![("abandon".to_string(), "en-GB".to_string())]
        );
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

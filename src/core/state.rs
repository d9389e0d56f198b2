//! # Application State
//!
//! Core business state for lexitree. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── page: Page                    // landing or learning
//! ├── nav: NavigationState          // view + selectors
//! ├── store: DataStore              // loaded word trees
//! ├── sources: Sources              // dataset base URLs
//! ├── load: LoadStatus              // idle / loading / failed
//! ├── status_message: String        // status bar text
//! ├── speaker: Arc<dyn Speaker>     // text-to-speech capability
//! └── speech_locale: String         // locale passed to the speaker
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::navigation::{NavigationState, Page};
use crate::core::speech::{DEFAULT_LOCALE, Speaker};
use crate::core::view::{self, RenderError, ViewModel};
use crate::data::{DataStore, Sources};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    /// The single user-facing message; the UI offers a retry.
    Failed(String),
}

pub struct App {
    pub page: Page,
    pub nav: NavigationState,
    pub store: DataStore,
    pub sources: Sources,
    pub load: LoadStatus,
    pub status_message: String,
    pub speaker: Arc<dyn Speaker>,
    pub speech_locale: String,
}

impl App {
    pub fn new(speaker: Arc<dyn Speaker>, sources: Sources) -> Self {
        Self {
            page: Page::Landing,
            nav: NavigationState::new(),
            store: DataStore::new(),
            sources,
            load: LoadStatus::Idle,
            status_message: String::from("Welcome to lexitree!"),
            speaker,
            speech_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn from_config(speaker: Arc<dyn Speaker>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(speaker, config.sources.clone());
        app.speech_locale = config.speech_locale.clone();
        app
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Loading
    }

    /// The view model for the current navigation state.
    pub fn current_view(&self) -> Result<ViewModel, RenderError> {
        view::render(&self.nav, &self.store, &self.sources)
    }
}

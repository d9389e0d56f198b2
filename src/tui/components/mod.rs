//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: view title, subtitle and status message
//! - `LandingPage`: the start screen
//! - `StatusView`: loading spinner and error panel
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! each frame to render:
//! - `CardGridState` / `CardGrid`: collections, levels and units
//! - `WordListState` / `WordList`: the words of one unit
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor arguments), not
//! by reading `App` directly. `ui.rs` turns the core `ViewModel` into props.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (header)
//! ├── landing.rs     (start screen)
//! ├── status.rs      (loading / error)
//! ├── card_grid.rs   (selectable card grid)
//! └── word_list.rs   (scrollable word cards)
//! ```

mod title_bar;
pub use title_bar::{TITLE_BAR_HEIGHT, TitleBar};

pub mod card_grid;
pub use card_grid::{CardContent, CardGrid, CardGridState, GridEvent};
pub mod word_list;
pub use word_list::{WordList, WordListEvent, WordListState};
pub mod landing;
pub use landing::LandingPage;
pub mod status;
pub use status::StatusView;

/// Flatten a test buffer into one string, row by row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

//! # CardGrid Component
//!
//! Selectable grid of cards for the collections, levels and units views.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardGridState` lives in `TuiState` (selection, last column count)
//! - `CardGrid` is created each frame with borrowed state and the cards
//!
//! Column count depends on the terminal width, so the state remembers the
//! value from the last render to move the selection up and down by rows.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 7;

/// What a single card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub lines: Vec<String>,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Enter pressed on the card at this position.
    Open(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGridState {
    pub selected: usize,
    pub columns: usize,
    pub len: usize,
    /// First visible row when the grid is taller than its area.
    pub first_row: usize,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            columns: 1,
            len: 0,
            first_row: 0,
        }
    }

    /// Sync with the number of cards currently shown, keeping the selection in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        if (0..self.len as isize).contains(&target) {
            self.selected = target as usize;
        }
    }
}

impl EventHandler for CardGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        let columns = self.columns.max(1) as isize;
        match event {
            TuiEvent::CursorLeft => self.move_by(-1),
            TuiEvent::CursorRight => self.move_by(1),
            TuiEvent::CursorUp => self.move_by(-columns),
            TuiEvent::CursorDown => self.move_by(columns),
            TuiEvent::Submit if self.len > 0 => return Some(GridEvent::Open(self.selected)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the grid.
pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    cards: &'a [CardContent],
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a mut CardGridState, cards: &'a [CardContent]) -> Self {
        Self { state, cards }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.cards.len());
        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        self.state.columns = columns;

        // Keep the selected row on screen
        let selected_row = self.state.selected / columns;
        if selected_row < self.state.first_row {
            self.state.first_row = selected_row;
        } else if selected_row >= self.state.first_row + visible_rows {
            self.state.first_row = selected_row + 1 - visible_rows;
        }

        let card_width = area.width / columns as u16;
        for (i, card) in self.cards.iter().enumerate() {
            let row = i / columns;
            if row < self.state.first_row || row >= self.state.first_row + visible_rows {
                continue;
            }
            let col = (i % columns) as u16;
            let rect = Rect {
                x: area.x + col * card_width,
                y: area.y + (row - self.state.first_row) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height),
            };
            render_card(frame, rect, card, i == self.state.selected);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardContent, selected: bool) {
    let border_style = if selected {
        Style::default().fg(card.color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(card.color).add_modifier(Modifier::DIM)
    };
    let border_type = if selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(
            truncate_to_width(&card.title, inner_width),
            border_style.remove_modifier(Modifier::DIM),
        ))
        .padding(Padding::horizontal(1));

    let text_style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let lines: Vec<Line> = card
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(truncate_to_width(l, inner_width), text_style)))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

//! # WordList Component
//!
//! Scrollable list of word cards for the words view.
//!
//! `WordList` is a transient component (created each frame) that wraps
//! `&'a mut WordListState` (persistent state) and the word cards (props).
//! Card heights are predicted with `textwrap` so the scroll view can be
//! sized before anything is drawn.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::WordCard;
use crate::data::PartOfSpeech;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Borders (1 left + 1 right) plus padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Width taken by the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

const DEFINITION_LABEL: &str = "Definition: ";
const EXAMPLE_LABEL: &str = "Example: ";

/// Events emitted by the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListEvent {
    /// Text to hand to the speaker.
    Speak(String),
}

/// Persistent state, kept in `TuiState`.
pub struct WordListState {
    pub scroll_state: ScrollViewState,
    pub selected: usize,
    /// Cached card heights from the last render.
    pub heights: Vec<u16>,
    pub viewport_height: u16,
    /// Cards as of the last render, for speech lookups.
    cards: Vec<WordCard>,
}

impl Default for WordListState {
    fn default() -> Self {
        Self::new()
    }
}

impl WordListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            heights: Vec::new(),
            viewport_height: 0,
            cards: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn selected_card(&self) -> Option<&WordCard> {
        self.cards.get(self.selected)
    }

    /// Scroll so the selected card is fully visible, aligning its top edge
    /// if it's taller than the viewport.
    pub fn scroll_to_selected(&mut self) {
        if self.selected >= self.heights.len() {
            return;
        }
        let top: u16 = self.heights[..self.selected].iter().sum();
        let bottom = top + self.heights[self.selected];
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport_height {
            let y = bottom.saturating_sub(self.viewport_height).min(top);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }
}

impl EventHandler for WordListState {
    type Event = WordListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<WordListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.cards.len() {
                    self.selected += 1;
                }
                self.scroll_to_selected();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            TuiEvent::SpeakWord => self
                .selected_card()
                .map(|c| WordListEvent::Speak(c.headword.clone())),
            TuiEvent::SpeakDefinition => self
                .selected_card()
                .and_then(|c| c.definition.clone())
                .map(WordListEvent::Speak),
            TuiEvent::SpeakExample => self
                .selected_card()
                .and_then(|c| c.example.clone())
                .map(WordListEvent::Speak),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct WordList<'a> {
    state: &'a mut WordListState,
    cards: &'a [WordCard],
}

impl<'a> WordList<'a> {
    pub fn new(state: &'a mut WordListState, cards: &'a [WordCard]) -> Self {
        Self { state, cards }
    }

    /// Predict the rendered height of a card at the given outer width.
    pub fn calculate_height(card: &WordCard, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }
        let options = || {
            textwrap::Options::new(content_width as usize)
                .break_words(true)
                .word_separator(textwrap::WordSeparator::AsciiSpace)
        };
        let wrapped = |label: &str, text: &Option<String>| -> u16 {
            match text {
                Some(t) => (textwrap::wrap(&format!("{label}{t}"), options()).len() as u16).max(1),
                None => 0,
            }
        };

        // Phonetic / part-of-speech line is always present.
        let mut lines: u16 = 1;
        lines += wrapped(DEFINITION_LABEL, &card.definition);
        lines += wrapped(EXAMPLE_LABEL, &card.example);
        if card.image_url.is_some() {
            lines += 1;
        }
        lines + VERTICAL_OVERHEAD
    }
}

impl Component for WordList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.cards = self.cards.to_vec();
        if self.state.selected >= self.cards.len() {
            self.state.selected = self.cards.len().saturating_sub(1);
        }

        let content_width = area.width.saturating_sub(SCROLLBAR_WIDTH);
        self.state.heights = self
            .cards
            .iter()
            .map(|c| WordList::calculate_height(c, content_width))
            .collect();
        self.state.viewport_height = area.height;
        let total_height: u16 = self.state.heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for (i, card) in self.cards.iter().enumerate() {
            let height = self.state.heights[i];
            let rect = Rect::new(0, y, content_width, height);
            scroll_view.render_widget(
                WordCardView {
                    card,
                    selected: i == self.state.selected,
                },
                rect,
            );
            y += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// One word card.
struct WordCardView<'a> {
    card: &'a WordCard,
    selected: bool,
}

fn part_of_speech_color(pos: Option<&PartOfSpeech>) -> Color {
    match pos {
        Some(PartOfSpeech::Noun) => Color::Blue,
        Some(PartOfSpeech::Verb) => Color::Green,
        Some(PartOfSpeech::Adjective) => Color::Magenta,
        Some(PartOfSpeech::Adverb) => Color::Yellow,
        Some(PartOfSpeech::Preposition) => Color::Red,
        Some(PartOfSpeech::Conjunction) => Color::LightBlue,
        _ => Color::Gray,
    }
}

impl Widget for WordCardView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let card = self.card;
        let border_style = if self.selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut title = vec![Span::styled(
            format!(" {}. {} ", card.index + 1, card.headword),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if !card.translation.is_empty() {
            title.push(Span::styled(
                format!("· {} ", card.translation),
                Style::default().fg(Color::LightBlue),
            ));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(title))
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut meta = Vec::new();
        if let Some(phonetic) = &card.phonetic {
            meta.push(Span::styled(
                format!("[{phonetic}] "),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ));
        }
        if let Some(pos) = &card.part_of_speech {
            meta.push(Span::styled(
                format!(" {} ", pos.code().to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(part_of_speech_color(Some(pos))),
            ));
        }

        let mut lines = vec![Line::from(meta)];
        if let Some(definition) = &card.definition {
            lines.push(Line::from(vec![
                Span::styled(DEFINITION_LABEL, Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
                Span::raw(definition.as_str()),
            ]));
        }
        if let Some(example) = &card.example {
            lines.push(Line::from(vec![
                Span::styled(EXAMPLE_LABEL, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(example.as_str(), Style::default().add_modifier(Modifier::ITALIC)),
            ]));
        }
        if let Some(url) = &card.image_url {
            lines.push(Line::from(Span::styled(
                url.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn card(index: usize, definition: Option<&str>) -> WordCard {
        WordCard {
            index,
            headword: format!("word{index}"),
            translation: format!("so'z{index}"),
            phonetic: Some("wɜːd".to_string()),
            part_of_speech: Some(PartOfSpeech::Noun),
            definition: definition.map(str::to_string),
            example: Some(format!("An example for word{index}.")),
            image_url: None,
        }
    }

    fn state_with(cards: Vec<WordCard>) -> WordListState {
        let mut state = WordListState::new();
        state.heights = vec![5; cards.len()];
        state.viewport_height = 10;
        state.cards = cards;
        state
    }

    #[test]
    fn test_calculate_height_counts_present_fields() {
        let full = card(0, Some("Short."));
        // meta + definition + example + borders
        assert_eq!(WordList::calculate_height(&full, 80), 5);

        let bare = WordCard {
            definition: None,
            example: None,
            ..card(0, None)
        };
        assert_eq!(WordList::calculate_height(&bare, 80), 3);

        let with_image = WordCard {
            image_url: Some("http://x/picture/0/0/0.jpg".to_string()),
            ..card(0, Some("Short."))
        };
        assert_eq!(WordList::calculate_height(&with_image, 80), 6);
    }

    #[test]
    fn test_calculate_height_wraps_long_definition() {
        let long = card(0, Some(&"very long definition text ".repeat(10)));
        assert!(WordList::calculate_height(&long, 40) > 6);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = state_with(vec![card(0, None), card(1, None), card(2, None)]);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut state = state_with((0..6).map(|i| card(i, None)).collect());
        state.selected = 3;
        state.scroll_to_selected();
        // Card 3 spans 15..20, viewport is 10 tall.
        assert_eq!(state.scroll_state.offset().y, 10);
        state.selected = 0;
        state.scroll_to_selected();
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_speak_events_use_selected_card() {
        let mut state = state_with(vec![card(0, Some("First.")), card(1, None)]);
        assert_eq!(
            state.handle_event(&TuiEvent::SpeakWord),
            Some(WordListEvent::Speak("word0".to_string()))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::SpeakDefinition),
            Some(WordListEvent::Speak("First.".to_string()))
        );
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::SpeakDefinition), None);
        assert_eq!(
            state.handle_event(&TuiEvent::SpeakExample),
            Some(WordListEvent::Speak("An example for word1.".to_string()))
        );
    }

    #[test]
    fn test_render_shows_word_and_translation() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let cards = vec![card(0, Some("A unit of language."))];
        let mut state = WordListState::new();

        terminal
            .draw(|f| WordList::new(&mut state, &cards).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("1. word0"));
        assert!(text.contains("so'z0"));
        assert!(text.contains("Definition: A unit of language."));
        assert!(text.contains("[wɜːd]"));
        assert_eq!(state.heights, vec![5]);
    }
}

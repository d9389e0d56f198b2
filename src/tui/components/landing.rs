//! # Landing Page Component
//!
//! Shown before learning starts: the app name, the collections on offer
//! and a prompt to press Enter.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::data::Collection;
use crate::tui::component::Component;

pub struct LandingPage {
    /// Drives the blinking prompt.
    pulse: bool,
}

impl LandingPage {
    pub fn new(pulse: bool) -> Self {
        Self { pulse }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "lexitree",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "English vocabulary with Uzbek translations",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
        ];

        for collection in Collection::ALL {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", collection.icon())),
                Span::styled(
                    collection.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} words", collection.word_total_label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::default());

        let prompt_style = if self.pulse {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(Span::styled("Press Enter to start learning", prompt_style)));
        lines.push(Line::from(Span::styled(
            format!("v{}  ·  q to quit", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_lists_collections_and_prompt() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| LandingPage::new(true).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("lexitree"));
        assert!(text.contains("Press Enter to start learning"));
        for collection in Collection::ALL {
            assert!(text.contains(collection.display_name()));
        }
    }
}

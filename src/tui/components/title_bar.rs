//! # TitleBar Component
//!
//! Two-line header: the view title with the status message on the right,
//! and the view subtitle underneath.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(vm.title.clone(), vm.subtitle.clone(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const TITLE_BAR_HEIGHT: u16 = 2;

pub struct TitleBar {
    pub title: String,
    pub subtitle: String,
    /// Transient status (e.g. "Loading...", "All data loaded")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, subtitle: String, status_message: String) -> Self {
        Self {
            title,
            subtitle,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [top, bottom] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = Line::from(vec![
            Span::styled("lexitree", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(self.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(title), top);

        if !self.status_message.is_empty() {
            let status = Paragraph::new(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(status, top);
        }

        let subtitle = Span::styled(
            self.subtitle.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(Paragraph::new(subtitle), bottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_renders_all_props() {
        let backend = TestBackend::new(80, TITLE_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new(
            "Essential Words - Levels".to_string(),
            "Choose a level to study".to_string(),
            "Loading...".to_string(),
        );

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("lexitree"));
        assert!(text.contains("Essential Words - Levels"));
        assert!(text.contains("Choose a level to study"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_title_bar_without_status() {
        let backend = TestBackend::new(60, TITLE_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new("Word Collections".to_string(), String::new(), String::new());

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Word Collections"));
        assert!(!text.contains("Loading"));
    }
}

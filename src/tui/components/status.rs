//! # Status Views
//!
//! Centered placeholders for the learning area when there is nothing to
//! browse: the loading spinner and the error panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ERROR_PANEL_WIDTH: u16 = 50;

pub enum StatusView<'a> {
    Loading { spinner_frame: usize },
    Error {
        message: &'a str,
        /// Show the "press r" hint.
        retryable: bool,
    },
}

impl Component for StatusView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            StatusView::Loading { spinner_frame } => {
                let spinner = SPINNER[*spinner_frame % SPINNER.len()];
                let line = Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Cyan)),
                    Span::raw(" Loading vocabulary..."),
                ]);
                let [center] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(area);
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
            }
            StatusView::Error { message, retryable } => {
                let mut lines = vec![Line::from(Span::styled(
                    *message,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))];
                lines.push(Line::default());
                let hint = if *retryable {
                    "Press r to retry"
                } else {
                    "Press Esc to go back"
                };
                lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

                let [row] = Layout::vertical([Constraint::Length(lines.len() as u16 + 2)])
                    .flex(Flex::Center)
                    .areas(area);
                let [panel] = Layout::horizontal([Constraint::Length(ERROR_PANEL_WIDTH.min(area.width))])
                    .flex(Flex::Center)
                    .areas(row);

                let paragraph = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::Red))
                            .title(" Error "),
                    );
                frame.render_widget(paragraph, panel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(mut view: StatusView) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_view() {
        let text = draw(StatusView::Loading { spinner_frame: 3 });
        assert!(text.contains("Loading vocabulary..."));
    }

    #[test]
    fn test_error_view_with_retry_hint() {
        let text = draw(StatusView::Error {
            message: "Failed to load data",
            retryable: true,
        });
        assert!(text.contains("Failed to load data"));
        assert!(text.contains("Press r to retry"));
        // Nothing is loaded yet, so there is nowhere to go back to
        assert!(!text.contains("Esc"));
    }

    #[test]
    fn test_error_view_without_retry_hint() {
        let text = draw(StatusView::Error {
            message: "No words found",
            retryable: false,
        });
        assert!(text.contains("No words found"));
        assert!(!text.contains("retry"));
    }
}

use crate::core::navigation::{Page, View};
use crate::core::state::{App, LoadStatus};
use crate::core::view::{Accent, ViewBody, ViewModel};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CardContent, CardGrid, LandingPage, StatusView, TITLE_BAR_HEIGHT, TitleBar, WordList,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

const GRID_HELP: &str = "arrows move · Enter open · Esc back · Ctrl+H home · q quit";
const WORDS_HELP: &str = "↑↓ select · s say word · d definition · e example · Esc back · q quit";
const FAILED_HELP: &str = "r retry · Ctrl+H home · q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    if app.page == Page::Landing {
        LandingPage::new(tui.pulse_value > 0.5).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(TITLE_BAR_HEIGHT), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let (title, subtitle, help) = match &app.load {
        LoadStatus::Loading => {
            StatusView::Loading { spinner_frame }.render(frame, main_area);
            ("Loading".to_string(), String::new(), "Ctrl+H home · q quit")
        }
        LoadStatus::Failed(message) => {
            StatusView::Error {
                message,
                retryable: true,
            }
            .render(frame, main_area);
            ("Error".to_string(), String::new(), FAILED_HELP)
        }
        LoadStatus::Idle => match app.current_view() {
            Ok(vm) => {
                let help = draw_body(frame, main_area, &vm, tui);
                (vm.title, vm.subtitle, help)
            }
            Err(e) => {
                StatusView::Error {
                    message: e.user_message(),
                    retryable: false,
                }
                .render(frame, main_area);
                ("Error".to_string(), String::new(), "Esc back · Ctrl+H home · q quit")
            }
        },
    };

    TitleBar::new(title, subtitle, app.status_message.clone()).render(frame, title_area);
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

/// Draws the browsable body and returns the matching help line.
fn draw_body(frame: &mut Frame, area: Rect, vm: &ViewModel, tui: &mut TuiState) -> &'static str {
    match &vm.body {
        ViewBody::Words(words) => {
            WordList::new(&mut tui.words, words).render(frame, area);
            WORDS_HELP
        }
        body => {
            let cards = card_contents(body);
            CardGrid::new(&mut tui.grid, &cards).render(frame, area);
            GRID_HELP
        }
    }
}

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Blue,
        Accent::Green => Color::Green,
        Accent::Purple => Color::Magenta,
        Accent::Pink => Color::LightMagenta,
    }
}

/// Grid props for the card-based views. Words are not grid cards.
pub fn card_contents(body: &ViewBody) -> Vec<CardContent> {
    match body {
        ViewBody::Collections(cards) => cards
            .iter()
            .map(|c| CardContent {
                title: format!("{} {}", c.icon, c.name),
                lines: vec![c.tagline.to_string(), format!("{} words", c.word_total)],
                color: accent_color(c.accent),
            })
            .collect(),
        ViewBody::Levels(cards) => cards
            .iter()
            .map(|c| CardContent {
                title: format!("Level {}", c.number),
                lines: vec![format!("{} words", c.word_count)],
                color: accent_color(c.accent),
            })
            .collect(),
        ViewBody::Units(cards) => cards
            .iter()
            .map(|c| CardContent {
                title: format!("Unit {:02}", c.number),
                lines: vec![format!("{} words", c.word_count)],
                color: accent_color(c.accent),
            })
            .collect(),
        ViewBody::Words(_) => Vec::new(),
    }
}

/// Position of the card for `selector` in the given body, used to restore
/// the grid selection after going back.
pub fn position_of(body: &ViewBody, view: View, selector: usize) -> Option<usize> {
    match (body, view) {
        (ViewBody::Levels(cards), View::Levels) => cards.iter().position(|c| c.level == selector),
        (ViewBody::Units(cards), View::Units) => cards.iter().position(|c| c.unit == selector),
        _ => None,
    }
}

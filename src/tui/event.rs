use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C quits from anywhere
    Home,      // Ctrl/Cmd+H returns to the landing page
    Escape,
    Submit,
    Retry,

    // TUI-local events (handled by components)
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ScrollPageUp,
    ScrollPageDown,
    SpeakWord,
    SpeakDefinition,
    SpeakExample,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            // Ignore key releases reported by the keyboard enhancement protocol
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    let command = modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(TuiEvent::ForceQuit),
        KeyCode::Char('h') | KeyCode::Char('H') if command => Some(TuiEvent::Home),
        // Ctrl+H arrives as Backspace without the keyboard enhancement protocol
        KeyCode::Home | KeyCode::Backspace => Some(TuiEvent::Home),
        KeyCode::Esc => Some(TuiEvent::Escape),
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Up | KeyCode::Char('k') => Some(TuiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(TuiEvent::CursorDown),
        KeyCode::Left | KeyCode::Char('h') => Some(TuiEvent::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(TuiEvent::CursorRight),
        KeyCode::PageUp => Some(TuiEvent::ScrollPageUp),
        KeyCode::PageDown => Some(TuiEvent::ScrollPageDown),
        KeyCode::Char('q') => Some(TuiEvent::Quit),
        KeyCode::Char('r') => Some(TuiEvent::Retry),
        KeyCode::Char('s') => Some(TuiEvent::SpeakWord),
        KeyCode::Char('d') => Some(TuiEvent::SpeakDefinition),
        KeyCode::Char('e') => Some(TuiEvent::SpeakExample),
        _ => None,
    }
}

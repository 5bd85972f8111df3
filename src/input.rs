//! Keyboard and resize input.
//!
//! Converts crossterm events into navigation events. Only key presses count;
//! repeats and releases (reported on some platforms) are ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::navigator::NavEvent;

/// Map a terminal event to a navigation event, if it is one.
pub fn map_event(event: &Event) -> Option<NavEvent> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Resize(width, height) => Some(NavEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Map a key event to a navigation event.
///
/// - Right, `l`, Space, PageDown: next slide
/// - Left, `h`, PageUp: previous slide
/// - Home, `g`: first slide
/// - End, `G`: last slide
/// - `q`, Esc, Ctrl+C: quit
pub fn map_key(event: KeyEvent) -> Option<NavEvent> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind != KeyEventKind::Press {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(NavEvent::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') | KeyCode::Char(' ') => {
            Some(NavEvent::Next)
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => Some(NavEvent::Previous),
        KeyCode::Home | KeyCode::Char('g') => Some(NavEvent::First),
        KeyCode::End | KeyCode::Char('G') => Some(NavEvent::Last),
        KeyCode::Esc | KeyCode::Char('q') => Some(NavEvent::Quit),
        _ => None,
    }
}

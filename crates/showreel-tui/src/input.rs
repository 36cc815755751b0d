use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use showreel_core::intro::{InputEvent, NavKey};

use crate::content::NAV_ITEMS;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Page-level input the intro controller sees first
    Intro(InputEvent),
    /// Jump to a section anchor
    Navigate(&'static str),
    PointerDown { col: u16, row: u16 },
    PointerDrag { col: u16, row: u16 },
    PointerUp,
    Hover { col: u16, row: u16 },
    Resize,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Section shortcuts mirror the nav bar order
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            NAV_ITEMS
                .get(index)
                .map(|item| Action::Navigate(item.target))
                .unwrap_or(Action::None)
        }

        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => nav(NavKey::ArrowDown),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => nav(NavKey::ArrowUp),
        (KeyCode::PageDown, _) => nav(NavKey::PageDown),
        (KeyCode::PageUp, _) => nav(NavKey::PageUp),
        (KeyCode::Char(' '), _) => nav(NavKey::Space),
        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => nav(NavKey::Home),
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => nav(NavKey::End),

        _ => Action::None,
    }
}

fn nav(key: NavKey) -> Action {
    Action::Intro(InputEvent::Key(key))
}

/// Handle a mouse event. `wheel_delta` is the pixel delta of one notch.
pub fn handle_mouse_event(mouse: MouseEvent, wheel_delta: f64) -> Action {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::Intro(InputEvent::Wheel {
            delta_y: wheel_delta,
        }),
        MouseEventKind::ScrollUp => Action::Intro(InputEvent::Wheel {
            delta_y: -wheel_delta,
        }),
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { col, row },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag { col, row },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        MouseEventKind::Moved => Action::Hover { col, row },
        _ => Action::None,
    }
}

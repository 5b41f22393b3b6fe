//! Input events, converted from crossterm.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel; positive `delta` scrolls down.
    Scroll { x: u16, y: u16, delta: i16 },
    MouseMove { x: u16, y: u16 },
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether a widget handled an event or left it for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl Event {
    /// Shorthand for a key press without modifiers.
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Shorthand for a left click.
    pub fn click(x: u16, y: u16) -> Self {
        Event::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Convert a raw crossterm event. Key releases, drags and other
    /// events the control has no use for map to `None`.
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Event::Key {
                    key: Key::from_code(key.code)?,
                    modifiers: key.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1 }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1 }),
                    MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                    _ => None,
                }
            }
            CrosstermEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

impl Key {
    pub fn from_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        };
        Some(key)
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtButton> for MouseButton {
    fn from(btn: CtButton) -> Self {
        match btn {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}

//! Input events understood by the widget.

/// A discrete input event, in coordinates of the rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel; positive `delta` scrolls down
    Scroll { x: u16, y: u16, delta: i16 },
}

impl Event {
    /// A key press without modifiers.
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// A key press with Ctrl held.
    pub fn ctrl(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::ctrl(),
        }
    }

    /// A left click.
    pub fn click(x: u16, y: u16) -> Self {
        Event::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Convert a crossterm event. Returns `None` for events the widget
    /// has no use for (releases, focus, paste, resize, ...).
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let key_code = Key::from_key_code(key.code)?;
                Some(Event::Key {
                    key: key_code,
                    modifiers: key.modifiers.into(),
                })
            }
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                MouseEventKind::ScrollDown => Some(Event::Scroll {
                    x: mouse.column,
                    y: mouse.row,
                    delta: 1,
                }),
                MouseEventKind::ScrollUp => Some(Event::Scroll {
                    x: mouse.column,
                    y: mouse.row,
                    delta: -1,
                }),
                _ => None,
            },
            _ => None,
        }
    }
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

impl Key {
    fn from_key_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        Some(match code {
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
        })
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

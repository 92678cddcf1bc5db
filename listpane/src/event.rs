use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

/// Decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button press or click.
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel tick; `delta_y` is negative toward the top of the list.
    Scroll { x: u16, y: u16, delta_y: i16 },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
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

/// Key modifiers.
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

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    /// Decode a raw crossterm event.
    ///
    /// Returns `None` for input that cannot be decoded or that the widget
    /// has no use for (key releases, mouse movement, focus changes);
    /// callers report those as unhandled instead of failing.
    pub fn decode(raw: &CrosstermEvent) -> Option<Event> {
        match raw {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Event::Key {
                    key: Key::from_code(key.code)?,
                    modifiers: key.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                MouseEventKind::ScrollUp => Some(Event::Scroll {
                    x: mouse.column,
                    y: mouse.row,
                    delta_y: -1,
                }),
                MouseEventKind::ScrollDown => Some(Event::Scroll {
                    x: mouse.column,
                    y: mouse.row,
                    delta_y: 1,
                }),
                _ => None,
            },
            CrosstermEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

impl Key {
    /// `None` for key codes the widget does not recognize.
    pub fn from_code(code: crossterm::event::KeyCode) -> Option<Key> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Some(Key::Char(c)),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Home => Some(Key::Home),
            KeyCode::End => Some(Key::End),
            KeyCode::PageUp => Some(Key::PageUp),
            KeyCode::PageDown => Some(Key::PageDown),
            _ => None,
        }
    }
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

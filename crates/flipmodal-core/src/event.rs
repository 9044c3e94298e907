#![forbid(unsafe_code)]

//! Input events delivered to widgets.

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
}

impl KeyEvent {
    pub const fn new(code: KeyCode) -> Self {
        Self { code }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// Left-button press at `(x, y)`, the usual "tap".
    pub const fn left_down(x: u16, y: u16) -> Self {
        Self::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }
}

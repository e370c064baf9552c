//! The raw inputs a player can give.

use super::xy::XY;

/// A key which can be pressed or released in an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Char(char),
    F(usize),
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Insert,
    Tab,
    Enter,
    LeftCtrl,
    LeftAlt,
}

impl Key {
    pub fn is_ctrl(&self) -> bool {
        matches!(self, Self::LeftCtrl)
    }
}

/// A mouse button which can be pressed or released in an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
}

/// An action the player has taken in the [`IoSystem`](super::IoSystem).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// A key was pressed. Modifiers are sent as their own presses, just before the key they modify.
    KeyPress { key: Key },
    /// A key was let go.
    KeyRelease { key: Key },
    /// A mouse button was pressed.
    MousePress { pos: XY, button: MouseButton },
    /// A mouse button was released.
    MouseRelease { pos: XY, button: MouseButton },
    /// The mouse has moved to a new location, possibly while holding a button
    MouseMove { pos: XY },
    /// The display needs a redraw, e.g. because the terminal was resized.
    Redraw,
    /// The player asked to close the game from outside it.
    Closed,
    /// Some unknown input was received, with a description of what it was
    Unknown(String),
    /// Reading input failed, with a description of how
    Error(String),
}

impl Action {
    /// Where the mouse was, for mouse actions.
    pub fn position(&self) -> Option<XY> {
        match self {
            Self::MouseMove { pos } => Some(*pos),
            Self::MousePress { pos, .. } => Some(*pos),
            Self::MouseRelease { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    /// The character pressed, lowercased, if this is a character key press.
    pub fn pressed_char(&self) -> Option<char> {
        match self {
            Self::KeyPress { key: Key::Char(c) } => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }

    /// Whether this is a press of the given key.
    pub fn is_press(&self, key: Key) -> bool {
        matches!(self, Self::KeyPress { key: k } if *k == key)
    }

    /// Whether this is a left click, returning where.
    pub fn left_click(&self) -> Option<XY> {
        match self {
            Self::MousePress {
                pos,
                button: MouseButton::Left,
            } => Some(*pos),
            _ => None,
        }
    }
}

/// Shorthand for a key press, mostly for tests and scripted input.
pub fn press(key: Key) -> Action {
    Action::KeyPress { key }
}

/// Shorthand for pressing a character key.
pub fn press_char(ch: char) -> Action {
    Action::KeyPress { key: Key::Char(ch) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pressed_char_lowercases() {
        assert_eq!(press_char('L').pressed_char(), Some('l'));
        assert_eq!(press(Key::Enter).pressed_char(), None);
        assert_eq!(
            Action::KeyRelease { key: Key::Char('l') }.pressed_char(),
            None
        );
    }

    #[test]
    fn left_click_only_matches_left_presses() {
        let pos = XY(3, 4);
        assert_eq!(
            Action::MousePress { pos, button: MouseButton::Left }.left_click(),
            Some(pos)
        );
        assert_eq!(
            Action::MousePress { pos, button: MouseButton::Right }.left_click(),
            None
        );
        assert_eq!(Action::MouseMove { pos }.left_click(), None);
        assert_eq!(Action::MouseMove { pos }.position(), Some(pos));
    }
}

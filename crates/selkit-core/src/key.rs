//! Logical keyboard actions understood by the engine.

/// A keyboard action, independent of physical key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectKey {
    /// Focus the next option, wrapping around (`ArrowDown`).
    Next,
    /// Focus the previous option, wrapping around (`ArrowUp`).
    Previous,
    /// Pick the focused option of an open list (`Enter`).
    Commit,
    /// Close an open list (`Escape`).
    Dismiss,
    /// With empty input, drop the last value (`Backspace`, `Delete`).
    DeleteBackward,
    /// With empty input, open the list or pick the focused option (`" "`).
    Space,
    /// Pick the focused option of an open list, then let focus move on (`Tab`).
    Tab,
}

impl SelectKey {
    /// Map a DOM-style `KeyboardEvent.key` name.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowDown" | "Down" => Self::Next,
            "ArrowUp" | "Up" => Self::Previous,
            "Enter" => Self::Commit,
            "Escape" | "Esc" => Self::Dismiss,
            "Backspace" | "Delete" => Self::DeleteBackward,
            " " | "Spacebar" => Self::Space,
            "Tab" => Self::Tab,
            _ => return None,
        })
    }
}

/// Whether the engine handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum KeyOutcome {
    /// Handled; the host must suppress its default action and propagation.
    Consumed,
    /// Not handled; the host should process the key normally.
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

//! Cursor-addressed edit state for the email prompt.
//!
//! Transitions are modelled as a reducer: a tagged [`EditAction`] is applied
//! to an [`EditState`] by [`reduce`], which returns the next state without
//! touching the input. Offsets are measured in code points, so the cursor
//! always sits on a character boundary.

/// The edit buffer, its cursor, and the value before the last mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditState {
    /// The value before the most recent mutating action. Used only to detect
    /// "did the value change", not for undo.
    pub previous_value: String,
    /// Current buffer content.
    pub value: String,
    /// Cursor position in code points, within `0..=value.chars().count()`.
    pub cursor_offset: usize,
}

/// An atomic edit operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    MoveCursorLeft,
    MoveCursorRight,
    Insert(String),
    Delete,
}

impl EditState {
    /// Create a state seeded with `default_value`, cursor at its end.
    pub fn new(default_value: impl Into<String>) -> Self {
        let value = default_value.into();
        let cursor_offset = value.chars().count();
        Self {
            previous_value: value.clone(),
            value,
            cursor_offset,
        }
    }

    /// Buffer length in code points.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Byte index of the `char_offset`-th code point.
    fn byte_offset(&self, char_offset: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_offset)
            .map(|(at, _)| at)
            .unwrap_or(self.value.len())
    }
}

impl Default for EditState {
    fn default() -> Self {
        Self::new("")
    }
}

/// Apply `action` to `state`, returning the next state.
///
/// Out-of-range cursor requests are clamped and the duplicate-`@` insert is
/// dropped; no action ever fails.
pub fn reduce(state: &EditState, action: &EditAction) -> EditState {
    match action {
        EditAction::MoveCursorLeft => EditState {
            cursor_offset: state.cursor_offset.saturating_sub(1),
            ..state.clone()
        },
        EditAction::MoveCursorRight => EditState {
            cursor_offset: (state.cursor_offset + 1).min(state.len()),
            ..state.clone()
        },
        EditAction::Insert(text) => {
            // The buffer may hold at most one '@', even across a paste.
            if state.value.contains('@') && text.contains('@') {
                return state.clone();
            }

            let at = state.byte_offset(state.cursor_offset);
            let mut value = String::with_capacity(state.value.len() + text.len());
            value.push_str(&state.value[..at]);
            value.push_str(text);
            value.push_str(&state.value[at..]);

            EditState {
                previous_value: state.value.clone(),
                cursor_offset: state.cursor_offset + text.chars().count(),
                value,
            }
        }
        EditAction::Delete => {
            if state.cursor_offset == 0 {
                return state.clone();
            }

            let new_offset = state.cursor_offset - 1;
            let start = state.byte_offset(new_offset);
            let end = state.byte_offset(state.cursor_offset);
            let mut value = String::with_capacity(state.value.len());
            value.push_str(&state.value[..start]);
            value.push_str(&state.value[end..]);

            EditState {
                previous_value: state.value.clone(),
                value,
                cursor_offset: new_offset,
            }
        }
    }
}

//! Decoded keyboard events.
//!
//! Raw byte sequences are decoded by the hosting terminal layer; the prompt
//! only ever sees this logical form.

/// One decoded key press: the raw input text plus modifier and special-key
/// flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// Printable text carried by the event. Empty for special keys.
    pub text: String,
    pub left_arrow: bool,
    pub right_arrow: bool,
    pub up_arrow: bool,
    pub down_arrow: bool,
    pub enter: bool,
    pub tab: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub backspace: bool,
    pub delete: bool,
}

impl KeyPress {
    /// A plain text key press with no flags set.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

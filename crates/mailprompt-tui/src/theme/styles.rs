use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

/// Inverse video for the character under the cursor.
pub fn cursor_text() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Faint text for placeholder remainders and suggestion continuations.
pub fn dim_text() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

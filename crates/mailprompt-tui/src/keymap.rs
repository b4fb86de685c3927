//! Raw key-event decoding.
//!
//! Turns crossterm key events into the logical [`KeyPress`] form the widget
//! dispatches on. This is the only place the prompt meets the terminal's
//! keyboard encoding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mailprompt_core::KeyPress;

pub fn decode_key(key: &KeyEvent) -> KeyPress {
    let mut press = KeyPress {
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        ..KeyPress::default()
    };

    match key.code {
        KeyCode::Char(c) => press.text = c.to_string(),
        KeyCode::Left => press.left_arrow = true,
        KeyCode::Right => press.right_arrow = true,
        KeyCode::Up => press.up_arrow = true,
        KeyCode::Down => press.down_arrow = true,
        KeyCode::Enter => press.enter = true,
        KeyCode::Tab => press.tab = true,
        KeyCode::BackTab => {
            press.tab = true;
            press.shift = true;
        }
        KeyCode::Backspace => press.backspace = true,
        KeyCode::Delete => press.delete = true,
        _ => {}
    }

    press
}

/// Shell-level quit keys, checked before the widget sees the event.
pub fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c')))
}

//! The email prompt widget: state, key dispatch, and notifications.

use crate::key::KeyPress;
use crate::render::{render_prompt, TextRun};
use crate::state::{reduce, EditAction, EditState};
use crate::suggest::{suggest, DEFAULT_DOMAINS};

type Callback = Box<dyn FnMut(&str)>;

/// Construction-time configuration for [`EmailPrompt`].
#[derive(Clone, Debug)]
pub struct EmailPromptConfig {
    pub is_disabled: bool,
    pub placeholder: String,
    pub default_value: String,
    pub domains: Vec<String>,
}

impl EmailPromptConfig {
    pub fn new() -> Self {
        Self {
            is_disabled: false,
            placeholder: String::new(),
            default_value: String::new(),
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Candidate completions, checked in list order.
    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }
}

impl Default for EmailPromptConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An interactive single-line email input with domain autocompletion.
///
/// Owns its [`EditState`] exclusively; all mutation goes through
/// [`handle_key`](Self::handle_key) or [`submit`](Self::submit).
pub struct EmailPrompt {
    state: EditState,
    is_disabled: bool,
    placeholder: String,
    domains: Vec<String>,
    on_change: Option<Callback>,
    on_submit: Option<Callback>,
}

impl EmailPrompt {
    pub fn new(config: EmailPromptConfig) -> Self {
        Self {
            state: EditState::new(config.default_value),
            is_disabled: config.is_disabled,
            placeholder: config.placeholder,
            domains: config.domains,
            on_change: None,
            on_submit: None,
        }
    }

    /// Register a callback invoked once per action that changed the value.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Register a callback invoked when the value is submitted.
    pub fn on_submit(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn cursor_offset(&self) -> usize {
        self.state.cursor_offset
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// The active autocompletion, recomputed from the current value.
    pub fn suggestion(&self) -> Option<String> {
        suggest(&self.state.value, &self.domains)
    }

    /// Dispatch one decoded key press. First match wins; when the prompt is
    /// disabled no event is consumed at all.
    pub fn handle_key(&mut self, key: &KeyPress) {
        if self.is_disabled {
            return;
        }

        if key.up_arrow
            || key.down_arrow
            || (key.ctrl && key.text == "c")
            || key.tab
            || (key.shift && key.tab)
        {
            return;
        }

        if key.enter {
            self.submit();
            return;
        }

        if key.left_arrow {
            self.apply(EditAction::MoveCursorLeft);
        } else if key.right_arrow {
            self.apply(EditAction::MoveCursorRight);
        } else if key.backspace || key.delete {
            self.apply(EditAction::Delete);
        } else {
            self.apply(EditAction::Insert(key.text.clone()));
        }
    }

    /// Accept the active suggestion, if any, then notify `on_submit` with
    /// the resulting value.
    pub fn submit(&mut self) {
        if let Some(suggestion) = self.suggestion().filter(|s| !s.is_empty()) {
            self.apply(EditAction::Insert(suggestion));
        }

        let value = self.state.value.clone();
        if let Some(on_submit) = self.on_submit.as_mut() {
            on_submit(&value);
        }
    }

    /// Render the current state into styled runs.
    pub fn render(&self) -> Vec<TextRun> {
        render_prompt(
            &self.state.value,
            self.state.cursor_offset,
            self.suggestion().as_deref(),
            self.is_disabled,
            &self.placeholder,
        )
    }

    fn apply(&mut self, action: EditAction) {
        let next = reduce(&self.state, &action);
        let changed = next.value != self.state.value;
        self.state = next;

        if changed {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&self.state.value);
            }
        }
    }
}

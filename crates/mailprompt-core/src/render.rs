//! Deterministic text-to-styled-output rendering.
//!
//! The renderer maps `(value, cursor, suggestion, disabled, placeholder)` to
//! a sequence of [`TextRun`]s. Runs carry semantic styles only; how `Cursor`
//! and `Dim` are realized (inverse video, faint text) is up to the host.

/// Block glyph drawn when the cursor sits past the last character.
pub const CURSOR_GLYPH: char = '\u{2588}';

/// Visual treatment of a run of characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStyle {
    /// Regular text.
    Plain,
    /// The character under the cursor, drawn in inverse video.
    Cursor,
    /// Muted text: placeholder remainder and suggestion continuation.
    Dim,
}

/// A maximal run of consecutive characters sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Default)]
struct RunBuilder {
    runs: Vec<TextRun>,
}

impl RunBuilder {
    fn push_str(&mut self, text: &str, style: RunStyle) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.style == style {
                last.text.push_str(text);
                return;
            }
        }
        self.runs.push(TextRun::new(text, style));
    }

    fn push_char(&mut self, ch: char, style: RunStyle) {
        self.push_str(ch.encode_utf8(&mut [0; 4]), style);
    }

    fn finish(self) -> Vec<TextRun> {
        self.runs
    }
}

/// Render the prompt into styled runs.
///
/// Rule order is load-bearing: a visible suggestion with the cursor at the
/// end supersedes the plain trailing-cursor rule. An empty suggestion (the
/// typed fragment already spells a full domain) renders like no suggestion.
pub fn render_prompt(
    value: &str,
    cursor_offset: usize,
    suggestion: Option<&str>,
    is_disabled: bool,
    placeholder: &str,
) -> Vec<TextRun> {
    if value.is_empty() {
        return render_placeholder(is_disabled, placeholder);
    }

    if is_disabled {
        return vec![TextRun::new(value, RunStyle::Plain)];
    }

    let mut runs = RunBuilder::default();
    let mut length = 0;

    for (index, ch) in value.chars().enumerate() {
        let style = if index == cursor_offset {
            RunStyle::Cursor
        } else {
            RunStyle::Plain
        };
        runs.push_char(ch, style);
        length = index + 1;
    }

    if let Some(suggestion) = suggestion.filter(|s| !s.is_empty()) {
        if cursor_offset == length {
            let mut chars = suggestion.chars();
            if let Some(first) = chars.next() {
                runs.push_char(first, RunStyle::Cursor);
            }
            runs.push_str(chars.as_str(), RunStyle::Dim);
        } else {
            runs.push_str(suggestion, RunStyle::Dim);
        }
        return runs.finish();
    }

    if cursor_offset == length {
        runs.push_char(CURSOR_GLYPH, RunStyle::Cursor);
    }

    runs.finish()
}

fn render_placeholder(is_disabled: bool, placeholder: &str) -> Vec<TextRun> {
    if is_disabled {
        if placeholder.is_empty() {
            return Vec::new();
        }
        return vec![TextRun::new(placeholder, RunStyle::Dim)];
    }

    let mut chars = placeholder.chars();
    match chars.next() {
        Some(first) => {
            let mut runs = RunBuilder::default();
            runs.push_char(first, RunStyle::Cursor);
            runs.push_str(chars.as_str(), RunStyle::Dim);
            runs.finish()
        }
        None => vec![TextRun::new(CURSOR_GLYPH.to_string(), RunStyle::Cursor)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> TextRun {
        TextRun::new(text, RunStyle::Plain)
    }

    fn cursor(text: &str) -> TextRun {
        TextRun::new(text, RunStyle::Cursor)
    }

    fn dim(text: &str) -> TextRun {
        TextRun::new(text, RunStyle::Dim)
    }

    fn block() -> TextRun {
        cursor("\u{2588}")
    }

    #[test]
    fn test_placeholder_highlights_first_char() {
        let runs = render_prompt("", 0, None, false, "Start typing...");
        assert_eq!(runs, vec![cursor("S"), dim("tart typing...")]);
    }

    #[test]
    fn test_empty_value_without_placeholder_shows_block_cursor() {
        let runs = render_prompt("", 0, None, false, "");
        assert_eq!(runs, vec![block()]);
    }

    #[test]
    fn test_disabled_placeholder_is_fully_dim() {
        let runs = render_prompt("", 0, None, true, "Start typing...");
        assert_eq!(runs, vec![dim("Start typing...")]);
    }

    #[test]
    fn test_disabled_empty_without_placeholder_renders_nothing() {
        let runs = render_prompt("", 0, None, true, "");
        assert_eq!(runs, Vec::new());
    }

    #[test]
    fn test_disabled_value_is_plain_without_cursor() {
        let runs = render_prompt("test", 4, None, true, "Start typing...");
        assert_eq!(runs, vec![plain("test")]);
    }

    #[test]
    fn test_value_with_cursor_at_end() {
        let runs = render_prompt("test", 4, None, false, "");
        assert_eq!(runs, vec![plain("test"), block()]);
    }

    #[test]
    fn test_value_with_cursor_in_middle() {
        let runs = render_prompt("test", 1, None, false, "");
        assert_eq!(runs, vec![plain("t"), cursor("e"), plain("st")]);
    }

    #[test]
    fn test_value_with_cursor_at_start() {
        let runs = render_prompt("test", 0, None, false, "");
        assert_eq!(runs, vec![cursor("t"), plain("est")]);
    }

    #[test]
    fn test_suggestion_with_cursor_at_end_splits_lead_char() {
        let runs = render_prompt("test@", 5, Some("aol.com"), false, "");
        assert_eq!(runs, vec![plain("test@"), cursor("a"), dim("ol.com")]);
    }

    #[test]
    fn test_suggestion_narrowed_by_typed_fragment() {
        let runs = render_prompt("test@a", 6, Some("ol.com"), false, "");
        assert_eq!(runs, vec![plain("test@a"), cursor("o"), dim("l.com")]);
    }

    #[test]
    fn test_suggestion_with_cursor_away_from_end_is_fully_dim() {
        let runs = render_prompt("test@", 4, Some("aol.com"), false, "");
        assert_eq!(runs, vec![plain("test"), cursor("@"), dim("aol.com")]);
    }

    #[test]
    fn test_suggestion_supersedes_trailing_cursor() {
        let runs = render_prompt("test@", 5, Some("aol.com"), false, "");
        assert!(!runs.contains(&block()));
    }

    #[test]
    fn test_empty_suggestion_falls_back_to_trailing_cursor() {
        let runs = render_prompt("test@aol.com", 12, Some(""), false, "");
        assert_eq!(runs, vec![plain("test@aol.com"), block()]);
    }

    #[test]
    fn test_single_char_suggestion_has_no_dim_remainder() {
        let runs = render_prompt("test@aol.co", 11, Some("m"), false, "");
        assert_eq!(runs, vec![plain("test@aol.co"), cursor("m")]);
    }

    #[test]
    fn test_adjacent_plain_chars_merge_into_one_run() {
        let runs = render_prompt("abcdef", 3, None, false, "");
        assert_eq!(runs, vec![plain("abc"), cursor("d"), plain("ef")]);
    }

    #[test]
    fn test_multibyte_value_indexes_by_code_point() {
        let runs = render_prompt("a\u{00e9}b", 1, None, false, "");
        assert_eq!(runs, vec![plain("a"), cursor("\u{00e9}"), plain("b")]);
    }

    #[test]
    fn test_completed_value_after_submit() {
        let runs = render_prompt("test@aol.com", 12, None, false, "Start typing...");
        assert_eq!(runs, vec![plain("test@aol.com"), block()]);
    }
}

//! Styled-run to ratatui conversion.

use crate::theme;
use mailprompt_core::{RunStyle, TextRun};
use ratatui::text::{Line, Span};

pub fn run_to_span(run: &TextRun) -> Span<'static> {
    let style = match run.style {
        RunStyle::Plain => theme::normal_text(),
        RunStyle::Cursor => theme::cursor_text(),
        RunStyle::Dim => theme::dim_text(),
    };
    Span::styled(run.text.clone(), style)
}

pub fn runs_to_line(runs: &[TextRun]) -> Line<'static> {
    Line::from(runs.iter().map(run_to_span).collect::<Vec<_>>())
}

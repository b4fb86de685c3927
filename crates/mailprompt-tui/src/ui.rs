use crate::app::App;
use crate::line::runs_to_line;
use crate::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_prompt_box(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);
}

fn render_prompt_box(app: &App, frame: &mut Frame, area: Rect) {
    let box_area = centered_rect(60, area);

    let border = if app.prompt.is_disabled() {
        theme::unfocused_border()
    } else {
        theme::focused_border()
    };

    let block = Block::default()
        .title("Email address")
        .borders(Borders::ALL)
        .border_style(border);

    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let line = runs_to_line(&app.prompt.render());
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hint = if app.prompt.is_disabled() {
        "Esc: quit"
    } else {
        "Enter: submit  Esc: cancel"
    };

    let footer = Paragraph::new(Line::from(Span::styled(hint, theme::label_text())))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// A three-line input strip centered horizontally at `percent_x` width.
fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

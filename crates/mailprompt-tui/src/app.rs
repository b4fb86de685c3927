use crate::events::{Event, EventHandler};
use crate::keymap::{decode_key, should_quit};
use crate::ui;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mailprompt_core::{EmailPrompt, EmailPromptConfig, PromptResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Application shell hosting a single [`EmailPrompt`].
///
/// Quit keys (Esc, Ctrl+C) are consumed here, before widget dispatch; a
/// successful submit also ends the loop.
pub struct App {
    pub should_quit: bool,
    pub prompt: EmailPrompt,
    submitted: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(config: EmailPromptConfig) -> Self {
        let submitted = Rc::new(RefCell::new(None));

        let prompt = EmailPrompt::new(config)
            .on_change(|value| {
                tracing::debug!("value changed: {}", value);
            })
            .on_submit({
                let submitted = submitted.clone();
                move |value| {
                    tracing::info!("submitted: {}", value);
                    *submitted.borrow_mut() = Some(value.to_string());
                }
            });

        Self {
            should_quit: false,
            prompt,
            submitted,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The address accepted by the user, once a submit has happened.
    pub fn submitted(&self) -> Option<String> {
        self.submitted.borrow().clone()
    }

    pub fn handle_key_event(&mut self, key: crossterm::event::KeyEvent) {
        if should_quit(&key) {
            self.quit();
            return;
        }

        self.prompt.handle_key(&decode_key(&key));

        if self.submitted.borrow().is_some() {
            self.quit();
        }
    }

    pub async fn run(&mut self) -> PromptResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

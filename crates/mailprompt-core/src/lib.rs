pub mod config;
pub mod error;
pub mod key;
pub mod prompt;
pub mod render;
pub mod result;
pub mod state;
pub mod suggest;

pub use config::AppConfig;
pub use error::PromptError;
pub use key::KeyPress;
pub use prompt::{EmailPrompt, EmailPromptConfig};
pub use render::{render_prompt, RunStyle, TextRun, CURSOR_GLYPH};
pub use result::PromptResult;
pub use state::{reduce, EditAction, EditState};
pub use suggest::{suggest, DEFAULT_DOMAINS};

use crate::error::PromptError;

pub type PromptResult<T> = Result<T, PromptError>;

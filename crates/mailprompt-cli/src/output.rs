use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Completion {
    pub value: String,
    pub suggestion: Option<String>,
    pub completed: String,
}

impl Completion {
    pub fn new(value: &str, suggestion: Option<String>) -> Self {
        let completed = match &suggestion {
            Some(rest) => format!("{}{}", value, rest),
            None => value.to_string(),
        };
        Self {
            value: value.to_string(),
            suggestion,
            completed,
        }
    }
}

pub fn print_completion(completion: &Completion, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(completion)?);
    } else {
        println!("{}", completion.completed);
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailprompt")]
#[command(about = "An email address prompt with domain autocompletion", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Placeholder text shown while the input is empty
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Initial value; the cursor starts at its end
    #[arg(long, value_name = "EMAIL")]
    pub default_value: Option<String>,

    /// Comma-separated candidate domains, checked in order
    #[arg(long, value_delimiter = ',')]
    pub domains: Option<Vec<String>>,

    /// Render the prompt read-only
    #[arg(long)]
    pub disabled: bool,

    /// Path to a config file (or set MAILPROMPT_CONFIG env var)
    #[arg(long, value_name = "FILE", env = "MAILPROMPT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Complete a partially typed address without the interactive prompt
    Complete {
        /// Partially typed address, e.g. "user@gm"
        value: String,

        /// Comma-separated candidate domains, checked in order
        #[arg(long, value_delimiter = ',')]
        domains: Option<Vec<String>>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

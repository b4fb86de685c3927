mod cli;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use mailprompt_core::{suggest, AppConfig, EmailPromptConfig};
use mailprompt_tui::App;
use output::{print_completion, Completion};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("MAILPROMPT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    match cli.command {
        None => {
            // Flags win over the config file.
            let placeholder = cli
                .placeholder
                .unwrap_or_else(|| config.effective_placeholder().to_string());
            let domains = cli.domains.unwrap_or_else(|| config.effective_domains());

            let prompt_config = EmailPromptConfig::new()
                .with_placeholder(placeholder)
                .with_default_value(cli.default_value.unwrap_or_default())
                .with_domains(domains)
                .disabled(cli.disabled);

            let mut app = App::new(prompt_config);
            app.run().await?;

            match app.submitted() {
                Some(address) => println!("{}", address),
                None => std::process::exit(1),
            }
        }
        Some(Commands::Complete {
            value,
            domains,
            json,
        }) => {
            let domains = domains
                .or_else(|| cli.domains.clone())
                .unwrap_or_else(|| config.effective_domains());
            let completion = Completion::new(&value, suggest(&value, &domains));
            print_completion(&completion, json)?;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

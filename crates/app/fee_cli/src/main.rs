// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands};
use fee_core::completion::Completer;
use fee_core::completion::openai::{OpenAiCompleter, OpenAiConfig};
use fee_core::prompt::{PROBE_PERSONA, PROBE_QUESTION};

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Probe {
            api_key,
            model,
            base_url,
            max_tokens,
            timeout_secs,
            question,
        } => {
            let api_key = api_key
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| Error::Custom("OPENAI_API_KEY is not set".into()))?;
            let question = question.unwrap_or_else(|| PROBE_QUESTION.to_string());

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let completer = OpenAiCompleter::new(OpenAiConfig {
                api_key: Some(api_key),
                model,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            })?;

            log::info!("asking: {question}");
            let reply =
                runtime.block_on(completer.complete(PROBE_PERSONA, &question, max_tokens))?;
            println!("{reply}");
        }
    }

    Ok(())
}

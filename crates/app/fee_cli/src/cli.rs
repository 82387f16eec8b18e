use clap::{Parser, Subcommand};
use fee_core::completion::openai;
use fee_core::prompt::PROBE_MAX_TOKENS;

#[derive(Parser)]
#[command(name = "fee", about = "Fee chat backend tools", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Ask Fee a one-off question to check the completion service is reachable.
    Probe {
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, env = "OPENAI_MODEL", default_value = openai::DEFAULT_MODEL)]
        model: String,

        #[arg(long, env = "OPENAI_BASE_URL", default_value = openai::DEFAULT_BASE_URL)]
        base_url: String,

        #[arg(long, default_value_t = PROBE_MAX_TOKENS)]
        max_tokens: u32,

        /// Seconds to wait for the reply.
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        /// Question to ask instead of the default greeting.
        question: Option<String>,
    },
}

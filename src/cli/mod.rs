use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tubesum",
    about = "Tubesum - Summarize YouTube video transcripts and translate text over HTTP",
    version,
    long_about = "An HTTP service that fetches YouTube caption transcripts, condenses them with a hosted abstractive-summarization model, and translates text into a fixed set of supported languages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Port to listen on (overrides the configured port)
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// Configure inference endpoints and server settings
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },

    /// List supported translation target languages
    Languages,
}

use clap::Parser;
use history_window::app::{
    conversation::load_transcript,
    demo,
    error::{RecoveryExt, Result},
    logger, AppConfig, Model, Program,
};
use std::path::PathBuf;

/// Browse long conversations with windowed history
#[derive(Debug, Parser)]
#[command(name = "history-window", version, about)]
struct Cli {
    /// JSON transcript: a conversation object or an array of them
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of messages in the long demo conversation
    #[arg(long, default_value_t = 240)]
    messages: usize,

    /// Seed for the demo conversations
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Render inline below the prompt instead of on the alternate screen
    #[arg(long)]
    inline: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let _log_guard = match logger::init() {
        Ok(guard) => Some(guard),
        Err(err) if !err.is_fatal() => {
            eprintln!("Continuing without log file: {:#}", err);
            None
        }
        Err(err) => return Err(err),
    };

    let config = AppConfig::load(cli.config.as_deref())?;
    let conversations = match &cli.transcript {
        Some(path) => load_transcript(path)?,
        None => demo::demo_conversations(cli.messages, cli.seed),
    };

    let model = Model::new(config, conversations);
    Program::new(model, cli.inline)?.run()
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "voicebank")]
#[command(about = "Voicebank - session engine for crowdsourced voice donation", long_about = None)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the corpus JSON file (overrides the configured path)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Path to the recording journal (defaults to the platform data dir)
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session batch operations
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Mark sentences as recorded
    Record {
        /// Sentence ids to confirm
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show milestone progress
    Progress,
    /// Corpus inspection
    Corpus {
        #[command(subcommand)]
        action: CorpusAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Print the next batch of sentences to record
    Next {
        /// Override the configured batch size
        #[arg(long)]
        count: Option<usize>,
    },
}

#[derive(Subcommand)]
enum CorpusAction {
    /// Print corpus statistics and recorded coverage
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let context = commands::Context::resolve(cli.config, cli.corpus, cli.journal).await?;

    match cli.command {
        Commands::Session { action } => match action {
            SessionAction::Next { count } => commands::session::next(&context, count).await?,
        },
        Commands::Record { ids } => commands::record::run(&context, &ids).await?,
        Commands::Progress => commands::progress::run(&context).await?,
        Commands::Corpus { action } => match action {
            CorpusAction::Stats => commands::corpus::stats(&context).await?,
        },
    }

    Ok(())
}

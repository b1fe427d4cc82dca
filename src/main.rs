use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use memorizer::backend::HttpWordService;
use memorizer::config::Config;
use memorizer::coordinator::{Coordinator, CoordinatorSettings};
use memorizer::logging::init_tracing;
use memorizer::ui::render::render;
use memorizer::ui::runtime::{run_interactive, run_lookup};

#[derive(Parser, Debug)]
#[command(name = "memorizer", version, about = "Look up words, their definitions and associations")]
struct Cli {
    /// Path to the config file (default: ~/.config/memorizer/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the backend base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type words line by line and watch suggestions and results update (default)
    Interactive,
    /// Look up a single word and print the result
    Lookup {
        word: String,
        /// Let the backend split compound words (default: search.auto_split)
        #[arg(long, conflicts_with = "no_split")]
        split: bool,
        /// Look the word up unsplit even if auto_split is configured
        #[arg(long)]
        no_split: bool,
        /// Associations per split
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::info!(base_url = %config.backend.base_url, "starting");

    let service = HttpWordService::new(&config.backend).context("failed to build backend client")?;
    let settings = CoordinatorSettings::from(&config.search);
    let (coordinator, handle) = Coordinator::new(Arc::new(service), settings);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let task = tokio::spawn(coordinator.run());
            run_interactive(handle).await?;
            task.await.context("coordinator task failed")?;
        }
        Command::Lookup {
            word,
            split,
            no_split,
            limit,
        } => {
            drop(handle);
            let split = match (split, no_split) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let state = run_lookup(coordinator, &word, split, limit).await?;
            print!("{}", render(&state));
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
        config.validate()?;
    }

    Ok(config)
}

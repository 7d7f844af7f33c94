use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipehub::SourcePaths;
use recipehub_shared::RecipeSource;

mod cli;

/// recipehub - homepage recipe recommendations
#[derive(Parser)]
#[command(name = "recipehub")]
#[command(about = "Builds the recommended, popular and newest recipe carousels", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the recommendation set from provider snapshots
    Recommend {
        /// Saved recipes (JSON array)
        #[arg(long)]
        saved: Option<PathBuf>,

        /// Manually entered recipes (JSON array)
        #[arg(long)]
        manual: Option<PathBuf>,

        /// Backend response (JSON array or recommendations envelope)
        #[arg(long)]
        backend: Option<PathBuf>,

        /// Externally ranked popular recipes (JSON array)
        #[arg(long)]
        popular: Option<PathBuf>,

        /// User preferences (JSON object)
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Treat the user as signed in
        #[arg(long)]
        authenticated: bool,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Score every recipe of a file, best first
    Score {
        file: PathBuf,

        /// Source to tag records with (saved, manual, external)
        #[arg(long)]
        source: Option<RecipeSource>,

        #[arg(long)]
        pretty: bool,
    },
    /// Print the normalized form of every recipe of a file
    Normalize {
        file: PathBuf,

        /// Source to tag records with (saved, manual, external)
        #[arg(long)]
        source: Option<RecipeSource>,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipehub::Config::load(cli.config.clone())?;
    config.validate()?;

    recipehub::observability::init_observability(
        &config.observability.log_level,
        config.observability.format()?,
    )?;

    match cli.command {
        Commands::Recommend {
            saved,
            manual,
            backend,
            popular,
            preferences,
            authenticated,
            pretty,
        } => cli::recommend::recommend(
            config,
            cli::recommend::RecommendArgs {
                paths: SourcePaths {
                    saved,
                    manual,
                    backend,
                    popular,
                },
                preferences,
                authenticated,
                pretty,
            },
        ),
        Commands::Score {
            file,
            source,
            pretty,
        } => cli::inspect::score(config, &file, source, pretty),
        Commands::Normalize {
            file,
            source,
            pretty,
        } => cli::inspect::normalize(config, &file, source, pretty),
    }
}

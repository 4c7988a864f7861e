//! game-shelf CLI
//!
//! Command-line interface for resolving game references against IGDB and
//! tracking the results in a local shelf database.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Resolve and track game releases via IGDB", long_about = None)]
struct Cli {
    /// Path to the shelf database (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a game against IGDB and add it to the shelf
    Add {
        /// Free-text game title (the catalog corrects it)
        title: String,

        /// Platform name, alternative name, or abbreviation
        #[arg(short, long)]
        platform: String,

        /// Release region name or alias (e.g. na, eu, jp); defaults to the
        /// highest-priority region with a release date
        #[arg(short, long)]
        region: Option<String>,

        /// Resolve and print without saving
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List games on the shelf
    List,

    /// Show a stored game in detail
    Show {
        /// Catalog slug of the stored game
        slug: String,
    },

    /// Mark a stored game as purchased
    Purchased {
        /// Catalog slug of the stored game
        slug: String,

        /// Clear the purchased flag instead
        #[arg(long)]
        unset: bool,
    },

    /// Remove a game from the shelf
    Remove {
        /// Catalog slug of the stored game
        slug: String,
    },

    /// List recognized regions, codes, and aliases
    Regions,

    /// Manage IGDB (Twitch) API credentials
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current credentials and their sources
    Show,

    /// Interactively set up credentials
    Setup,

    /// Print the config file path
    Path,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Add {
            title,
            platform,
            region,
            dry_run,
        } => commands::add::run_add(cli.db, title, platform, region, dry_run),
        Commands::List => commands::shelf::run_list(cli.db),
        Commands::Show { slug } => commands::shelf::run_show(cli.db, &slug),
        Commands::Purchased { slug, unset } => {
            commands::shelf::run_purchased(cli.db, &slug, !unset)
        }
        Commands::Remove { slug } => commands::shelf::run_remove(cli.db, &slug),
        Commands::Regions => {
            commands::regions::run_regions();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Setup => commands::config::run_config_setup(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();
}

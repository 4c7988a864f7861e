use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::{Credentials, IgdbClient};
use game_shelf_core::{ResolutionRequest, ResolvedGame};
use game_shelf_resolve::resolve_game;

use crate::error::CliError;

/// Run the add command: resolve against IGDB, print, persist.
pub(crate) fn run_add(
    db: Option<PathBuf>,
    title: String,
    platform: String,
    region: Option<String>,
    dry_run: bool,
) -> Result<(), CliError> {
    let request = ResolutionRequest::new(title, platform, region.as_deref())?;

    let creds = match Credentials::load() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Set credentials via environment variables:");
            log::error!("  TWITCH_CLIENT_ID, TWITCH_CLIENT_SECRET");
            log::error!("");
            log::error!("Or run 'game-shelf config setup' to configure credentials.");
            log::error!("");
            return Err(e.into());
        }
    };

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;

    let resolved = rt.block_on(async {
        let pb = spinner("Connecting to IGDB...");
        let client = IgdbClient::connect(creds).await;
        pb.finish_and_clear();
        let client = client?;

        let pb = spinner(format!("Resolving \"{}\"...", request.title()));
        let resolved = resolve_game(&client, &request).await;
        pb.finish_and_clear();
        Ok::<ResolvedGame, CliError>(resolved?)
    })?;

    print_resolved(&resolved);

    if dry_run {
        log::info!(
            "{}",
            "Dry run: not saved".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    let conn = super::open_db(db)?;
    let row = game_shelf_db::insert_game(&conn, &resolved)?;
    log::info!(
        "{} Added to shelf as {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        row.slug
            .as_deref()
            .unwrap_or(&row.title)
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}

fn print_resolved(game: &ResolvedGame) {
    log::info!(
        "{} {}",
        game.title.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", game.platform).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Release: {} {}",
        game.release_date,
        format!("[{}]", game.region).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if let Some(summary) = &game.summary {
        log::info!("  {}", summary.if_supports_color(Stdout, |t| t.dimmed()));
    }
}

fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_db::GameRow;

use crate::error::CliError;

pub(crate) fn run_list(db: Option<PathBuf>) -> Result<(), CliError> {
    let conn = super::open_db(db)?;
    let games = game_shelf_db::list_games(&conn)?;

    if games.is_empty() {
        log::info!(
            "{}",
            "The shelf is empty. Add a game with 'game-shelf add'."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log::info!("Games on the shelf:");
    log::info!("");
    for game in &games {
        let marker = if game.purchased {
            "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            " ".to_string()
        };
        log::info!(
            "{} {} {} — {} {}",
            marker,
            game.title.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", game.platform).if_supports_color(Stdout, |t| t.cyan()),
            game.release_date,
            format!("[{}]", game.region).if_supports_color(Stdout, |t| t.dimmed()),
        );
        if let Some(slug) = &game.slug {
            log::info!("    {}", slug.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }

    Ok(())
}

pub(crate) fn run_show(db: Option<PathBuf>, slug: &str) -> Result<(), CliError> {
    let conn = super::open_db(db)?;
    let game = game_shelf_db::find_by_slug(&conn, slug)?.ok_or_else(|| {
        CliError::Database(game_shelf_db::OperationError::NotFound {
            key: slug.to_string(),
        })
    })?;

    print_row(&game);
    Ok(())
}

pub(crate) fn run_purchased(
    db: Option<PathBuf>,
    slug: &str,
    purchased: bool,
) -> Result<(), CliError> {
    let conn = super::open_db(db)?;
    game_shelf_db::set_purchased(&conn, slug, purchased)?;

    log::info!(
        "{} {} marked as {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        slug.if_supports_color(Stdout, |t| t.cyan()),
        if purchased { "purchased" } else { "not purchased" },
    );
    Ok(())
}

pub(crate) fn run_remove(db: Option<PathBuf>, slug: &str) -> Result<(), CliError> {
    let conn = super::open_db(db)?;
    game_shelf_db::delete_game(&conn, slug)?;

    log::info!(
        "{} Removed {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        slug.if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn print_row(game: &GameRow) {
    log::info!(
        "{} {}",
        game.title.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", game.platform).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Release:   {} {}",
        game.release_date,
        format!("[{}]", game.region).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Purchased: {}",
        if game.purchased { "yes" } else { "no" },
    );
    log::info!("  Added:     {}", game.added_at);
    if let Some(slug) = &game.slug {
        log::info!("  Slug:      {}", slug);
    }
    if let Some(summary) = &game.summary {
        log::info!("");
        log::info!("  {}", summary.if_supports_color(Stdout, |t| t.dimmed()));
    }
}

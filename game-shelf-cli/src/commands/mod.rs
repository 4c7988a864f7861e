use std::path::PathBuf;

use game_shelf_db::Connection;

use crate::error::CliError;

pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod regions;
pub(crate) mod shelf;

/// Open (creating if needed) the shelf database.
pub(crate) fn open_db(path: Option<PathBuf>) -> Result<Connection, CliError> {
    let path = match path {
        Some(p) => p,
        None => default_db_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(game_shelf_db::open_database(&path)?)
}

fn default_db_path() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|d| d.join("game-shelf").join("games.db"))
        .ok_or_else(|| CliError::config("Could not determine data directory"))
}

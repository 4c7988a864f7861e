//! CRUD operations for stored games.

use game_shelf_core::ResolvedGame;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("No stored game matches '{key}'")]
    NotFound { key: String },
    #[error("Game '{slug}' is already on the shelf")]
    Duplicate { slug: String },
}

/// A stored game as read back from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub platform: String,
    pub region: String,
    pub release_date: String,
    pub summary: Option<String>,
    pub purchased: bool,
    pub added_at: String,
}

/// Insert a resolved game. A duplicate slug is rejected rather than
/// silently upserted; re-resolving an owned game is a caller decision.
pub fn insert_game(conn: &Connection, game: &ResolvedGame) -> Result<GameRow, OperationError> {
    let result = conn.execute(
        "INSERT INTO games (slug, title, platform, region, release_date, summary)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            game.slug,
            game.title,
            game.platform,
            game.region.name(),
            game.release_date,
            game.summary,
        ],
    );

    match result {
        Ok(_) => find_by_id(conn, conn.last_insert_rowid())?.ok_or_else(|| {
            OperationError::NotFound {
                key: game.title.clone(),
            }
        }),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(OperationError::Duplicate {
                slug: game.slug.clone().unwrap_or_else(|| game.title.clone()),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Find a stored game by its catalog slug.
pub fn find_by_slug(conn: &Connection, slug: &str) -> Result<Option<GameRow>, OperationError> {
    let row = conn
        .query_row(
            "SELECT id, slug, title, platform, region, release_date, summary, purchased, added_at
             FROM games WHERE slug = ?1",
            params![slug],
            row_to_game,
        )
        .optional()?;
    Ok(row)
}

/// Find a stored game by its row id.
pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<GameRow>, OperationError> {
    let row = conn
        .query_row(
            "SELECT id, slug, title, platform, region, release_date, summary, purchased, added_at
             FROM games WHERE id = ?1",
            params![id],
            row_to_game,
        )
        .optional()?;
    Ok(row)
}

/// List all stored games, oldest first.
pub fn list_games(conn: &Connection) -> Result<Vec<GameRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, slug, title, platform, region, release_date, summary, purchased, added_at
         FROM games ORDER BY added_at, id",
    )?;
    let rows = stmt
        .query_map([], row_to_game)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Set or clear the purchased flag for a stored game.
pub fn set_purchased(
    conn: &Connection,
    slug: &str,
    purchased: bool,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE games SET purchased = ?2 WHERE slug = ?1",
        params![slug, purchased],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            key: slug.to_string(),
        });
    }
    Ok(())
}

/// Remove a stored game.
pub fn delete_game(conn: &Connection, slug: &str) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM games WHERE slug = ?1", params![slug])?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            key: slug.to_string(),
        });
    }
    Ok(())
}

fn row_to_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<GameRow> {
    Ok(GameRow {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        platform: row.get(3)?,
        region: row.get(4)?,
        release_date: row.get(5)?,
        summary: row.get(6)?,
        purchased: row.get(7)?,
        added_at: row.get(8)?,
    })
}

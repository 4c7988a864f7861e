//! SQLite persistence layer for the game shelf.
//!
//! Stores resolved game records (via rusqlite with the bundled feature)
//! with schema creation and versioned migrations. The resolver only
//! produces records; everything about storing them lives here.

pub mod operations;
pub mod schema;

// Callers hand connections back to the operation functions; re-export the
// type so they don't need a direct rusqlite dependency.
pub use rusqlite::Connection;

pub use operations::{
    GameRow, OperationError, delete_game, find_by_id, find_by_slug, insert_game, list_games,
    set_purchased,
};
pub use schema::{SchemaError, open_database, open_memory};

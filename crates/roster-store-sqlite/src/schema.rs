//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The unique index on `national_id` is the storage-layer guarantee behind
/// the service's check-then-insert sequence.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS people (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    national_id TEXT    NOT NULL UNIQUE,   -- exactly 11 digits, validated upstream
    age         INTEGER NOT NULL
);

PRAGMA user_version = 1;
";

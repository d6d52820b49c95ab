//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS people (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL CHECK (name <> ''),
    surname     TEXT NOT NULL CHECK (surname <> ''),
    patronymic  TEXT NOT NULL DEFAULT '',
    age         INTEGER NOT NULL DEFAULT 0,
    gender      TEXT NOT NULL DEFAULT '',
    nationality TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; store-assigned, immutable
);

CREATE INDEX IF NOT EXISTS people_name_idx    ON people(name);
CREATE INDEX IF NOT EXISTS people_surname_idx ON people(surname);

PRAGMA user_version = 1;
";

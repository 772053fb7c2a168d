//! SQL schema for the tutoring SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    name          TEXT NOT NULL,
    grade         TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

-- One running mean per (user, subject, topic, level).
-- The UNIQUE constraint is the conflict target of the attempt upsert.
CREATE TABLE IF NOT EXISTS progress (
    user_id      INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    subject      TEXT NOT NULL,
    topic        TEXT NOT NULL,
    level        TEXT NOT NULL,   -- TaxonomyLevel name
    score        REAL NOT NULL,   -- full precision; rounded on read only
    attempts     INTEGER NOT NULL,
    last_updated TEXT NOT NULL,
    UNIQUE (user_id, subject, topic, level)
);

-- Append-only. seq is assigned per session at insert time.
CREATE TABLE IF NOT EXISTS conversation_turns (
    turn_id    TEXT PRIMARY KEY,
    user_id    INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    session_id TEXT NOT NULL,
    seq        INTEGER NOT NULL,
    message    TEXT NOT NULL,
    is_user    INTEGER NOT NULL,
    level      TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE (user_id, session_id, seq)
);

-- Write-once per generation request.
CREATE TABLE IF NOT EXISTS study_materials (
    material_id  TEXT PRIMARY KEY,
    user_id      INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    subject      TEXT NOT NULL,
    topic        TEXT NOT NULL,
    content_type TEXT NOT NULL,
    content      TEXT NOT NULL,   -- JSON document
    created_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS progress_user_idx  ON progress(user_id, subject, topic);
CREATE INDEX IF NOT EXISTS materials_user_idx ON study_materials(user_id, created_at);

PRAGMA user_version = 1;
";

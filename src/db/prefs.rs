//! Persisted preferences. Last write wins.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use clap::ValueEnum;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;

pub const KEY_THEME: &str = "theme";
pub const KEY_LAST_NOTIFIED_ID: &str = "last_notified_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

pub fn get(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn theme(pool: &DbPool) -> AppResult<Theme> {
    Ok(get(pool, KEY_THEME)?
        .as_deref()
        .and_then(Theme::from_db_str)
        .unwrap_or_default())
}

pub fn set_theme(pool: &DbPool, theme: Theme) -> AppResult<()> {
    set(pool, KEY_THEME, theme.as_str())?;
    ttlog(&pool.conn, "prefs", KEY_THEME, &format!("Theme set to {}", theme.as_str()))
}

pub fn last_notified_id(pool: &DbPool) -> AppResult<Option<String>> {
    get(pool, KEY_LAST_NOTIFIED_ID)
}

/// Store the latest notification id. Returns true when it changed.
pub fn update_last_notified_id(pool: &DbPool, id: &str) -> AppResult<bool> {
    let previous = last_notified_id(pool)?;
    if previous.as_deref() == Some(id) {
        return Ok(false);
    }
    set(pool, KEY_LAST_NOTIFIED_ID, id)?;
    Ok(true)
}

/// All stored preferences, ordered by key.
pub fn all(pool: &DbPool) -> AppResult<Vec<(String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT key, value FROM preferences ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

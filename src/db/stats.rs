use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) LOG ENTRIES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    let last_fetch_failure: Option<String> = pool
        .conn
        .query_row(
            "SELECT date || '  ' || target FROM log
             WHERE operation = 'fetch_failed'
             ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last fetch failure:{} {}",
        CYAN,
        RESET,
        last_fetch_failure.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 3) PREFERENCES
    //
    let prefs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))?;
    println!("{}• Preferences:{} {}", CYAN, RESET, prefs);

    println!();
    Ok(())
}

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
    // 2) STORED KEYS
    //
    let keys: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys, RESET);

    let last_write: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM kv_store ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last write:{} {}",
        CYAN,
        RESET,
        last_write
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 3) AUDIT LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    let resets: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'reset'",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);
    println!("{}• Resets logged:{} {}", CYAN, RESET, resets);

    println!();
    Ok(())
}

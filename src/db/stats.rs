use crate::db::migrate::{latest_version, schema_version};
use crate::db::pool::DbPool;
use crate::db::queries::{count_punches, load_punches};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::Local;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA VERSION
    //
    let version = schema_version(&pool.conn)?;
    println!(
        "{}• Schema:{} v{} (latest v{})",
        CYAN,
        RESET,
        version,
        latest_version()
    );

    //
    // 3) TOTAL PUNCHES
    //
    let count = count_punches(&pool.conn)?;
    println!("{}• Total punches:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 4) RANGE (strict read: diagnostics must not hide read errors)
    //
    let punches = load_punches(&pool.conn).map_err(|e| AppError::StoreRead(e.to_string()))?;
    let mut instants: Vec<_> = punches
        .iter()
        .filter_map(|p| p.instant_in(&Local).ok())
        .collect();
    instants.sort();

    let unreadable = punches.len() - instants.len();
    let unmapped = (count.max(0) as usize).saturating_sub(punches.len());
    let fmt = |i: Option<&chrono::DateTime<Local>>| {
        i.map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Punch range:{}", CYAN, RESET);
    println!("    from: {}", fmt(instants.first()));
    println!("    to:   {}", fmt(instants.last()));

    if unmapped > 0 {
        println!(
            "{}• Unreadable rows:{} {}{}{}",
            CYAN, RESET, YELLOW, unmapped, RESET
        );
    }

    if unreadable > 0 {
        println!(
            "{}• Unreadable timestamps:{} {}{}{}",
            CYAN, RESET, YELLOW, unreadable, RESET
        );
    }

    println!();
    Ok(())
}

use crate::db::migrate::{latest_version, schema_version};
use crate::db::pool::DbPool;
use crate::db::queries::count;
use crate::errors::AppResult;
use crate::models::Entity;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
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
    println!(
        "{}• Schema version:{} {} / {}",
        CYAN,
        RESET,
        schema_version(&pool.conn)?,
        latest_version()
    );

    //
    // 3) ROWS PER TABLE
    //
    println!("{}• Records:{}", CYAN, RESET);
    for entity in Entity::ALL {
        let n = count(pool, entity.table())?;
        println!("    {:<10} {}{}{}", entity.table(), GREEN, n, RESET);
    }

    let log_rows = count(pool, "log")?;
    println!("{}• Audit log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}

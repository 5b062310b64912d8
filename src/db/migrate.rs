//! Schema migrations.
//!
//! Each migration has a stable name and is recorded in the `log` table as
//! `migration_applied` / <name> once it ran. `PRAGMA user_version` mirrors the
//! number of applied migrations.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    name: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "20240110_0001_create_record_tables",
        description: "Created invoices, employees, materials, projects, clients and tasks tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id      TEXT PRIMARY KEY,
            number  TEXT NOT NULL,
            date    TEXT NOT NULL,
            amount  REAL NOT NULL,
            status  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS employees (
            id          TEXT PRIMARY KEY,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            position    TEXT NOT NULL,
            department  TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            salary      REAL NOT NULL,
            hire_date   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS materials (
            id              TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            category        TEXT NOT NULL,
            supplier        TEXT NOT NULL,
            unit_cost       REAL NOT NULL,
            unit_type       TEXT NOT NULL,
            stock_quantity  INTEGER NOT NULL DEFAULT 0,
            image_path      TEXT
        );

        CREATE TABLE IF NOT EXISTS projects (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL,
            client_email  TEXT NOT NULL,
            start_date    TEXT NOT NULL,
            end_date      TEXT NOT NULL,
            status        TEXT NOT NULL,
            budget        REAL NOT NULL,
            client_name   TEXT NOT NULL,
            location      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS clients (
            id              TEXT PRIMARY KEY,
            last_name       TEXT NOT NULL,
            first_name      TEXT NOT NULL,
            phone           TEXT NOT NULL,
            email           TEXT NOT NULL,
            project         TEXT NOT NULL,
            invoice_amount  REAL NOT NULL DEFAULT 0,
            deadline        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            status       TEXT NOT NULL,
            priority     TEXT NOT NULL,
            start_date   TEXT NOT NULL,
            end_date     TEXT NOT NULL,
            assigned_to  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        name: "20240305_0002_add_client_task_timestamps",
        description: "Added created_at / updated_at to clients and tasks",
        sql: r#"
        ALTER TABLE clients ADD COLUMN created_at TEXT NOT NULL DEFAULT '';
        ALTER TABLE clients ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
        ALTER TABLE tasks ADD COLUMN created_at TEXT NOT NULL DEFAULT '';
        ALTER TABLE tasks ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';

        UPDATE clients SET created_at = datetime('now'), updated_at = datetime('now')
            WHERE created_at = '';
        UPDATE tasks SET created_at = datetime('now'), updated_at = datetime('now')
            WHERE created_at = '';
        "#,
    },
];

/// Ensure that the `log` table exists. Migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([name], |_| Ok(())).optional()?.is_some())
}

fn applied_count(conn: &Connection) -> rusqlite::Result<usize> {
    let mut n = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.name)? {
            n += 1;
        }
    }
    Ok(n)
}

/// Path of the main database file, `None` for in-memory databases.
fn database_path(conn: &Connection) -> Option<String> {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .ok()
        .filter(|p| !p.is_empty())
}

/// Zip the database file next to itself before upgrading an existing schema.
fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let src = std::path::Path::new(db_path);
    let Some(parent) = src.parent() else {
        warning("Could not determine DB directory; backup skipped.");
        return Ok(());
    };

    let backup_path = parent.join(format!(
        "{}-bizdesk_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    ));

    let to_err = |stage: &str, e: &dyn std::fmt::Display| {
        AppError::Migration(format!("backup failed ({stage}): {e}"))
    };

    let file = File::create(&backup_path).map_err(|e| to_err("create", &e))?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| to_err("start_file", &e))?;
    let content = fs::read(src).map_err(|e| to_err("read", &e))?;
    zip.write_all(&content).map_err(|e| to_err("write_all", &e))?;
    zip.finish().map_err(|e| to_err("finish", &e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let already = applied_count(conn)?;
    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|m| !matches!(is_applied(conn, m.name), Ok(true)))
        .collect();

    if pending.is_empty() {
        return Ok(0);
    }

    // Upgrading a schema that already holds data: keep a copy first.
    if already > 0 {
        warning("Existing schema detected, creating safety backup before migration...");
        match database_path(conn) {
            Some(path) => backup_before_migration(&path)?,
            None => warning("Could not determine DB path; backup skipped."),
        }
    }

    for m in &pending {
        let batch = format!(
            "BEGIN;\n{}\nINSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', '{}', '{}');\nCOMMIT;",
            m.sql,
            m.name,
            m.description.replace('\'', "''")
        );

        conn.execute_batch(&batch).map_err(|e| {
            let _ = conn.execute_batch("ROLLBACK;");
            AppError::Migration(format!("{}: {}", m.name, e))
        })?;

        success(format!("Migration applied: {}", m.name));
    }

    let version = applied_count(conn)?;
    conn.execute_batch(&format!("PRAGMA user_version = {};", version))?;

    Ok(pending.len())
}

/// `PRAGMA user_version` of the open database.
pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

pub fn latest_version() -> usize {
    MIGRATIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once_and_set_user_version() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert_eq!(schema_version(&conn).unwrap(), latest_version() as i64);

        let has_ts: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name = 'updated_at'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(has_ts, 1);
    }
}

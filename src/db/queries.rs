//! Generic persistence for every `Record` type.
//!
//! Table and column names come from compile-time constants, values are
//! always bound as parameters.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Employee, Record};
use chrono::Local;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, params_from_iter};

fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn insert_sql<R: Record>() -> String {
    let mut cols: Vec<&str> = R::COLUMNS.to_vec();
    if R::TIMESTAMPED {
        cols.extend(["created_at", "updated_at"]);
    }
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::ENTITY.table(),
        cols.join(", "),
        placeholders(cols.len())
    )
}

fn update_sql<R: Record>() -> String {
    let mut sets: Vec<String> = R::COLUMNS
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, c)| format!("{} = ?{}", c, i + 1))
        .collect();
    if R::TIMESTAMPED {
        sets.push(format!("updated_at = ?{}", R::COLUMNS.len() + 1));
    }
    format!(
        "UPDATE {} SET {} WHERE {} = ?1",
        R::ENTITY.table(),
        sets.join(", "),
        R::COLUMNS[0]
    )
}

/// Every row of the table, ordered by primary key.
pub fn load_all<R: Record>(pool: &DbPool) -> AppResult<Vec<R>> {
    let sql = format!(
        "SELECT * FROM {} ORDER BY {} ASC",
        R::ENTITY.table(),
        R::COLUMNS[0]
    );
    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| R::from_row(row))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find<R: Record>(pool: &DbPool, id: &str) -> AppResult<Option<R>> {
    let sql = format!(
        "SELECT * FROM {} WHERE {} = ?1",
        R::ENTITY.table(),
        R::COLUMNS[0]
    );
    let found = pool
        .conn
        .query_row(&sql, [id], |row| R::from_row(row))
        .optional()?;
    Ok(found)
}

pub fn exists<R: Record>(pool: &DbPool, id: &str) -> AppResult<bool> {
    let sql = format!(
        "SELECT 1 FROM {} WHERE {} = ?1 LIMIT 1",
        R::ENTITY.table(),
        R::COLUMNS[0]
    );
    let hit = pool
        .conn
        .query_row(&sql, [id], |_| Ok(()))
        .optional()?;
    Ok(hit.is_some())
}

pub fn insert<R: Record>(pool: &DbPool, record: &R) -> AppResult<()> {
    let mut values = record.values();
    if R::TIMESTAMPED {
        let ts = now();
        values.push(Value::Text(ts.clone()));
        values.push(Value::Text(ts));
    }
    pool.conn
        .execute(&insert_sql::<R>(), params_from_iter(values))?;
    Ok(())
}

/// Full-row update keyed by id. Returns the number of rows touched.
pub fn update<R: Record>(pool: &DbPool, record: &R) -> AppResult<usize> {
    let mut values = record.values();
    if R::TIMESTAMPED {
        values.push(Value::Text(now()));
    }
    let n = pool
        .conn
        .execute(&update_sql::<R>(), params_from_iter(values))?;
    Ok(n)
}

pub fn delete<R: Record>(pool: &DbPool, id: &str) -> AppResult<usize> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = ?1",
        R::ENTITY.table(),
        R::COLUMNS[0]
    );
    Ok(pool.conn.execute(&sql, [id])?)
}

pub fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    Ok(pool.conn.query_row(&sql, [], |row| row.get(0))?)
}

/// Id of the employee owning `email`, if any.
pub fn employee_with_email(pool: &DbPool, email: &str) -> AppResult<Option<String>> {
    let sql = format!(
        "SELECT id FROM {} WHERE lower(email) = lower(?1) LIMIT 1",
        <Employee as Record>::ENTITY.table()
    );
    let owner = pool
        .conn
        .query_row(&sql, [email.trim()], |row| row.get(0))
        .optional()?;
    Ok(owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::models::status::TaskPriority;
    use crate::models::status::TaskStatus;
    use crate::models::{Invoice, Task};
    use crate::utils::date::parse_date;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        pool
    }

    fn task(id: &str) -> Task {
        Task {
            id: id.into(),
            name: "Pour foundations".into(),
            description: String::new(),
            status: TaskStatus::ToDo,
            priority: TaskPriority::High,
            start_date: parse_date("2024-04-01").unwrap(),
            end_date: parse_date("2024-04-10").unwrap(),
            assigned_to: "Sami".into(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn sql_shapes() {
        assert_eq!(
            insert_sql::<Invoice>(),
            "INSERT INTO invoices (id, number, date, amount, status) VALUES (?1, ?2, ?3, ?4, ?5)"
        );
        assert_eq!(
            update_sql::<Invoice>(),
            "UPDATE invoices SET number = ?2, date = ?3, amount = ?4, status = ?5 WHERE id = ?1"
        );
        assert!(update_sql::<Task>().ends_with("updated_at = ?9 WHERE id = ?1"));
    }

    #[test]
    fn insert_find_update_delete() {
        let pool = pool();
        let mut t = task("T001");
        insert(&pool, &t).unwrap();
        assert!(exists::<Task>(&pool, "T001").unwrap());

        let loaded: Task = find(&pool, "T001").unwrap().unwrap();
        assert!(!loaded.created_at.is_empty());
        assert_eq!(loaded.name, t.name);

        t.status = TaskStatus::Completed;
        assert_eq!(update(&pool, &t).unwrap(), 1);
        let loaded: Task = find(&pool, "T001").unwrap().unwrap();
        assert_eq!(loaded.status, TaskStatus::Completed);

        assert_eq!(delete::<Task>(&pool, "T001").unwrap(), 1);
        assert!(find::<Task>(&pool, "T001").unwrap().is_none());
        assert_eq!(delete::<Task>(&pool, "T001").unwrap(), 0);
    }

    #[test]
    fn load_all_is_ordered_by_id() {
        let pool = pool();
        insert(&pool, &task("T002")).unwrap();
        insert(&pool, &task("T001")).unwrap();
        let ids: Vec<String> = load_all::<Task>(&pool)
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["T001", "T002"]);
        assert_eq!(count(&pool, "tasks").unwrap(), 2);
    }

    #[test]
    fn database_rejects_duplicate_primary_key() {
        let pool = pool();
        insert(&pool, &task("T001")).unwrap();
        assert!(insert(&pool, &task("T001")).is_err());
    }
}

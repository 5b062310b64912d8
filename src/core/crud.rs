//! Add / edit / delete orchestration shared by every record type.
//!
//! Each operation validates first, talks to the database with one statement,
//! then writes one audit line.

use crate::core::validate::Validate;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::status::TaskStatus;
use crate::models::{Record, Task};

fn target<R: Record>(id: &str) -> String {
    format!("{} {}", R::ENTITY.label(), id)
}

pub struct CrudLogic;

impl CrudLogic {
    /// Load a record or fail with `NotFound`.
    pub fn load<R: Record>(pool: &DbPool, id: &str) -> AppResult<R> {
        queries::find::<R>(pool, id)?.ok_or_else(|| AppError::not_found(R::ENTITY.label(), id))
    }

    /// Validate and insert a new record.
    ///
    /// Duplicate ids are refused here, before the INSERT is attempted.
    pub fn add<R: Validate>(pool: &DbPool, record: &R) -> AppResult<()> {
        record.validate()?;

        if queries::exists::<R>(pool, record.id())? {
            return Err(AppError::DuplicateId {
                entity: R::ENTITY.label().to_string(),
                id: record.id().to_string(),
            });
        }
        record.check_unique(pool)?;

        queries::insert(pool, record)?;

        audit(
            &pool.conn,
            "add",
            &target::<R>(record.id()),
            &format!("Added {} '{}'", R::ENTITY.label(), record.id()),
        )?;
        Ok(())
    }

    /// Re-validate and store the full row of an existing record.
    pub fn edit<R: Validate>(pool: &DbPool, record: &R) -> AppResult<()> {
        record.validate()?;

        if !queries::exists::<R>(pool, record.id())? {
            return Err(AppError::not_found(R::ENTITY.label(), record.id()));
        }
        record.check_unique(pool)?;

        queries::update(pool, record)?;

        audit(
            &pool.conn,
            "edit",
            &target::<R>(record.id()),
            &format!("Updated {} '{}'", R::ENTITY.label(), record.id()),
        )?;
        Ok(())
    }

    pub fn delete<R: Record>(pool: &DbPool, id: &str) -> AppResult<()> {
        let removed = queries::delete::<R>(pool, id)?;
        if removed == 0 {
            return Err(AppError::not_found(R::ENTITY.label(), id));
        }

        audit(
            &pool.conn,
            "del",
            &target::<R>(id),
            &format!("Deleted {} '{}'", R::ENTITY.label(), id),
        )?;
        Ok(())
    }

    /// Mark a task completed (device `TASK_COMPLETED`). Returns the updated task.
    pub fn complete_task(pool: &DbPool, id: &str) -> AppResult<Task> {
        let mut task: Task = Self::load(pool, id)?;
        if task.status == TaskStatus::Completed {
            return Ok(task);
        }
        task.status = TaskStatus::Completed;
        queries::update(pool, &task)?;

        audit(
            &pool.conn,
            "device",
            &target::<Task>(id),
            "Task marked Completed by device",
        )?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::load_entries;
    use crate::db::migrate::run_pending_migrations;
    use crate::models::status::{InvoiceStatus, TaskPriority};
    use crate::models::{Employee, Invoice};
    use crate::utils::date::parse_date;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        pool
    }

    fn invoice(id: &str) -> Invoice {
        Invoice {
            id: id.into(),
            number: "INV-2024-001".into(),
            date: parse_date("2024-02-01").unwrap(),
            amount: 1200.0,
            status: InvoiceStatus::Pending,
        }
    }

    fn employee(id: &str, email: &str) -> Employee {
        Employee {
            id: id.into(),
            first_name: "Amira".into(),
            last_name: "Ben Salah".into(),
            position: "Engineer".into(),
            department: "IT".into(),
            email: email.into(),
            salary: 2500.0,
            hire_date: parse_date("2020-01-15").unwrap(),
        }
    }

    #[test]
    fn add_then_duplicate_is_rejected_without_touching_db() {
        let pool = pool();
        CrudLogic::add(&pool, &invoice("INV1")).unwrap();

        let mut other = invoice("INV1");
        other.amount = 5.0;
        let err = CrudLogic::add(&pool, &other).unwrap_err();
        assert!(matches!(err, AppError::DuplicateId { .. }));

        let stored: Invoice = CrudLogic::load(&pool, "INV1").unwrap();
        assert_eq!(stored.amount, 1200.0);
        assert_eq!(queries::count(&pool, "invoices").unwrap(), 1);
    }

    #[test]
    fn invalid_record_is_not_inserted() {
        let pool = pool();
        let mut bad = invoice("INV2");
        bad.number = "2024-001".into();
        assert!(matches!(
            CrudLogic::add(&pool, &bad),
            Err(AppError::Validation { .. })
        ));
        assert_eq!(queries::count(&pool, "invoices").unwrap(), 0);
    }

    #[test]
    fn employee_email_must_be_unique_across_ids() {
        let pool = pool();
        CrudLogic::add(&pool, &employee("E1", "amira@example.com")).unwrap();
        let err = CrudLogic::add(&pool, &employee("E2", "AMIRA@example.com")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail(_)));

        // editing the owner with its own email is fine
        let mut same = employee("E1", "amira@example.com");
        same.salary = 3000.0;
        CrudLogic::edit(&pool, &same).unwrap();
    }

    #[test]
    fn edit_and_delete_unknown_ids_are_not_found() {
        let pool = pool();
        assert!(matches!(
            CrudLogic::edit(&pool, &invoice("NOPE")),
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            CrudLogic::delete::<Invoice>(&pool, "NOPE"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn every_change_is_audited() {
        let pool = pool();
        CrudLogic::add(&pool, &invoice("A1")).unwrap();
        let mut inv = invoice("A1");
        inv.status = InvoiceStatus::Paid;
        CrudLogic::edit(&pool, &inv).unwrap();
        CrudLogic::delete::<Invoice>(&pool, "A1").unwrap();

        let ops: Vec<String> = load_entries(&pool.conn, None)
            .unwrap()
            .into_iter()
            .filter(|e| e.target == "invoice A1")
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec!["add", "edit", "del"]);
    }

    #[test]
    fn complete_task_sets_status() {
        let pool = pool();
        let task = Task {
            id: "T001".into(),
            name: "Pour slab".into(),
            description: String::new(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            start_date: parse_date("2024-04-01").unwrap(),
            end_date: parse_date("2024-04-10").unwrap(),
            assigned_to: "Karim".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        CrudLogic::add(&pool, &task).unwrap();
        let done = CrudLogic::complete_task(&pool, "T001").unwrap();
        assert_eq!(done.status, TaskStatus::Completed);
        let stored: Task = CrudLogic::load(&pool, "T001").unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
    }
}

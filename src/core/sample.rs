//! Demonstration dataset loaded by `init --sample`.

use crate::core::crud::CrudLogic;
use crate::core::validate::Validate;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::status::{InvoiceStatus, ProjectStatus, TaskPriority, TaskStatus};
use crate::models::{Client, Employee, Invoice, Material, Project, Task};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV001".into(),
            number: "INV-2024-001".into(),
            date: day(2024, 1, 15),
            amount: 1500.0,
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: "INV002".into(),
            number: "INV-2024-002".into(),
            date: day(2024, 2, 20),
            amount: 2450.5,
            status: InvoiceStatus::Pending,
        },
        Invoice {
            id: "INV003".into(),
            number: "INV-2024-003".into(),
            date: day(2024, 3, 5),
            amount: 780.0,
            status: InvoiceStatus::Overdue,
        },
    ]
}

fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "E001".into(),
            first_name: "Amira".into(),
            last_name: "Ben Salah".into(),
            position: "Site Engineer".into(),
            department: "Engineering".into(),
            email: "amira.bensalah@example.com".into(),
            salary: 3200.0,
            hire_date: day(2018, 9, 1),
        },
        Employee {
            id: "E002".into(),
            first_name: "Youssef".into(),
            last_name: "Trabelsi".into(),
            position: "Accountant".into(),
            department: "Finance".into(),
            email: "youssef.trabelsi@example.com".into(),
            salary: 2600.0,
            hire_date: day(2021, 3, 15),
        },
        Employee {
            id: "E003".into(),
            first_name: "Lina".into(),
            last_name: "Haddad".into(),
            position: "Architect".into(),
            department: "Engineering".into(),
            email: "lina.haddad@example.com".into(),
            salary: 3600.0,
            hire_date: day(2022, 6, 1),
        },
    ]
}

fn materials() -> Vec<Material> {
    vec![
        Material {
            id: "M001".into(),
            name: "Cement CEM II".into(),
            category: "Binders".into(),
            supplier: "Carthage Cement".into(),
            unit_cost: 12.5,
            unit_type: "bag".into(),
            stock_quantity: 340,
            image_path: None,
        },
        Material {
            id: "M002".into(),
            name: "Rebar 12mm".into(),
            category: "Steel".into(),
            supplier: "El Fouladh".into(),
            unit_cost: 8.75,
            unit_type: "bar".into(),
            stock_quantity: 1200,
            image_path: None,
        },
        Material {
            id: "M003".into(),
            name: "Hollow brick".into(),
            category: "Masonry".into(),
            supplier: "Briqueterie du Sud".into(),
            unit_cost: 0.45,
            unit_type: "piece".into(),
            stock_quantity: 15000,
            image_path: None,
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "P001".into(),
            name: "Villa Gammarth".into(),
            client_email: "owner@villa.example.com".into(),
            start_date: day(2024, 1, 10),
            end_date: day(2024, 12, 20),
            status: ProjectStatus::InProgress,
            budget: 250000.0,
            client_name: "Sami Jaziri".into(),
            location: "Gammarth".into(),
        },
        Project {
            id: "P002".into(),
            name: "Office Lac 2".into(),
            client_email: "facilities@lac.example.com".into(),
            start_date: day(2024, 5, 1),
            end_date: day(2025, 6, 30),
            status: ProjectStatus::Planned,
            budget: 480000.0,
            client_name: "Lac Holdings".into(),
            location: "Tunis".into(),
        },
    ]
}

fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "C001".into(),
            last_name: "Jaziri".into(),
            first_name: "Sami".into(),
            phone: "+21622333444".into(),
            email: "sami.jaziri@example.com".into(),
            project: "Villa Gammarth".into(),
            invoice_amount: 25000.0,
            deadline: day(2024, 12, 20),
            created_at: String::new(),
            updated_at: String::new(),
        },
        Client {
            id: "C002".into(),
            last_name: "Mansour".into(),
            first_name: "Rania".into(),
            phone: "98765432".into(),
            email: "rania.mansour@example.com".into(),
            project: "Office Lac 2".into(),
            invoice_amount: 12000.0,
            deadline: day(2025, 6, 30),
            created_at: String::new(),
            updated_at: String::new(),
        },
    ]
}

fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "T001".into(),
            name: "Foundation pour".into(),
            description: "Pour and cure the foundation slab".into(),
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            start_date: day(2024, 2, 1),
            end_date: day(2024, 2, 15),
            assigned_to: "Amira Ben Salah".into(),
            created_at: String::new(),
            updated_at: String::new(),
        },
        Task {
            id: "T002".into(),
            name: "Electrical rough-in".into(),
            description: "First-fix wiring, ground floor".into(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            start_date: day(2024, 4, 1),
            end_date: day(2024, 5, 10),
            assigned_to: "Lina Haddad".into(),
            created_at: String::new(),
            updated_at: String::new(),
        },
        Task {
            id: "T003".into(),
            name: "Order windows".into(),
            description: String::new(),
            status: TaskStatus::ToDo,
            priority: TaskPriority::Low,
            start_date: day(2024, 5, 1),
            end_date: day(2024, 6, 1),
            assigned_to: "Youssef Trabelsi".into(),
            created_at: String::new(),
            updated_at: String::new(),
        },
    ]
}

fn load<R: Validate>(pool: &DbPool, records: Vec<R>) -> AppResult<usize> {
    let mut inserted = 0;
    for r in records {
        if queries::exists::<R>(pool, r.id())? {
            continue;
        }
        CrudLogic::add(pool, &r)?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Insert the sample rows whose ids are still free. Returns how many were added.
pub fn load_sample_data(pool: &DbPool) -> AppResult<usize> {
    let mut total = 0;
    total += load(pool, invoices())?;
    total += load(pool, employees())?;
    total += load(pool, materials())?;
    total += load(pool, projects())?;
    total += load(pool, clients())?;
    total += load(pool, tasks())?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::models::Entity;

    #[test]
    fn sample_loads_once() {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();

        let first = load_sample_data(&pool).unwrap();
        assert_eq!(first, 16);
        assert_eq!(load_sample_data(&pool).unwrap(), 0);

        for e in Entity::ALL {
            assert!(queries::count(&pool, e.table()).unwrap() > 0, "{:?}", e);
        }
    }
}

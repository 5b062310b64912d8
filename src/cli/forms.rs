//! Turn `add` / `edit` flags into records.
//!
//! On add every required flag must be present. On edit a flag that is not
//! given keeps the stored value.

use crate::cli::parser::{
    ClientArgs, EmployeeArgs, InvoiceArgs, MaterialArgs, ProjectArgs, TaskArgs,
};
use crate::core::validate::{parse_amount, parse_date, parse_quantity};
use crate::errors::{AppError, AppResult};
use crate::models::status::{InvoiceStatus, ProjectStatus, TaskPriority, TaskStatus, allowed};
use crate::models::{Client, Employee, Invoice, Material, Project, Record, Task};

/// Flags for one record type.
pub trait Form {
    type Output: Record;

    fn id(&self) -> &str;

    /// Build a record from the flags, falling back to `base` for absent ones.
    fn build(&self, base: Option<&Self::Output>) -> AppResult<Self::Output>;
}

fn field<T>(
    name: &str,
    input: &Option<String>,
    current: Option<T>,
    parse: impl Fn(&str) -> AppResult<T>,
) -> AppResult<T> {
    match input {
        Some(v) => parse(v),
        None => current.ok_or_else(|| AppError::MissingField(name.to_string())),
    }
}

fn text(name: &str, input: &Option<String>, current: Option<String>) -> AppResult<String> {
    field(name, input, current, |v| Ok(v.trim().to_string()))
}

fn invoice_status(v: &str) -> AppResult<InvoiceStatus> {
    InvoiceStatus::parse(v).ok_or_else(|| AppError::InvalidStatus {
        value: v.to_string(),
        allowed: allowed(&InvoiceStatus::ALL, |s| s.as_str()),
    })
}

fn project_status(v: &str) -> AppResult<ProjectStatus> {
    ProjectStatus::parse(v).ok_or_else(|| AppError::InvalidStatus {
        value: v.to_string(),
        allowed: allowed(&ProjectStatus::ALL, |s| s.as_str()),
    })
}

fn task_status(v: &str) -> AppResult<TaskStatus> {
    TaskStatus::parse(v).ok_or_else(|| AppError::InvalidStatus {
        value: v.to_string(),
        allowed: allowed(&TaskStatus::ALL, |s| s.as_str()),
    })
}

fn task_priority(v: &str) -> AppResult<TaskPriority> {
    TaskPriority::parse(v).ok_or_else(|| AppError::InvalidStatus {
        value: v.to_string(),
        allowed: allowed(&TaskPriority::ALL, |s| s.as_str()),
    })
}

impl Form for InvoiceArgs {
    type Output = Invoice;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(&self, base: Option<&Invoice>) -> AppResult<Invoice> {
        Ok(Invoice {
            id: self.id.trim().to_string(),
            number: text("number", &self.number, base.map(|b| b.number.clone()))?,
            date: field("date", &self.date, base.map(|b| b.date), |v| parse_date("date", v))?,
            amount: field("amount", &self.amount, base.map(|b| b.amount), |v| {
                parse_amount("amount", v)
            })?,
            status: field("status", &self.status, base.map(|b| b.status), invoice_status)?,
        })
    }
}

impl Form for EmployeeArgs {
    type Output = Employee;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(&self, base: Option<&Employee>) -> AppResult<Employee> {
        Ok(Employee {
            id: self.id.trim().to_string(),
            first_name: text("first-name", &self.first_name, base.map(|b| b.first_name.clone()))?,
            last_name: text("last-name", &self.last_name, base.map(|b| b.last_name.clone()))?,
            position: text("position", &self.position, base.map(|b| b.position.clone()))?,
            department: text("department", &self.department, base.map(|b| b.department.clone()))?,
            email: text("email", &self.email, base.map(|b| b.email.clone()))?,
            salary: field("salary", &self.salary, base.map(|b| b.salary), |v| {
                parse_amount("salary", v)
            })?,
            hire_date: field("hire-date", &self.hire_date, base.map(|b| b.hire_date), |v| {
                parse_date("hire_date", v)
            })?,
        })
    }
}

impl Form for MaterialArgs {
    type Output = Material;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(&self, base: Option<&Material>) -> AppResult<Material> {
        // --image "" clears the picture
        let image_path = match &self.image {
            Some(p) if p.trim().is_empty() => None,
            Some(p) => Some(p.trim().to_string()),
            None => base.and_then(|b| b.image_path.clone()),
        };

        Ok(Material {
            id: self.id.trim().to_string(),
            name: text("name", &self.name, base.map(|b| b.name.clone()))?,
            category: text("category", &self.category, base.map(|b| b.category.clone()))?,
            supplier: text("supplier", &self.supplier, base.map(|b| b.supplier.clone()))?,
            unit_cost: field("unit-cost", &self.unit_cost, base.map(|b| b.unit_cost), |v| {
                parse_amount("unit_cost", v)
            })?,
            unit_type: text("unit-type", &self.unit_type, base.map(|b| b.unit_type.clone()))?,
            stock_quantity: field("stock", &self.stock, base.map(|b| b.stock_quantity), |v| {
                parse_quantity("stock", v)
            })?,
            image_path,
        })
    }
}

impl Form for ProjectArgs {
    type Output = Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(&self, base: Option<&Project>) -> AppResult<Project> {
        Ok(Project {
            id: self.id.trim().to_string(),
            name: text("name", &self.name, base.map(|b| b.name.clone()))?,
            client_email: text(
                "client-email",
                &self.client_email,
                base.map(|b| b.client_email.clone()),
            )?,
            start_date: field("start-date", &self.start_date, base.map(|b| b.start_date), |v| {
                parse_date("start_date", v)
            })?,
            end_date: field("end-date", &self.end_date, base.map(|b| b.end_date), |v| {
                parse_date("end_date", v)
            })?,
            status: field("status", &self.status, base.map(|b| b.status), project_status)?,
            budget: field("budget", &self.budget, base.map(|b| b.budget), |v| {
                parse_amount("budget", v)
            })?,
            client_name: text(
                "client-name",
                &self.client_name,
                base.map(|b| b.client_name.clone()),
            )?,
            location: text("location", &self.location, base.map(|b| b.location.clone()))?,
        })
    }
}

impl Form for ClientArgs {
    type Output = Client;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(&self, base: Option<&Client>) -> AppResult<Client> {
        Ok(Client {
            id: self.id.trim().to_string(),
            last_name: text("last-name", &self.last_name, base.map(|b| b.last_name.clone()))?,
            first_name: text("first-name", &self.first_name, base.map(|b| b.first_name.clone()))?,
            phone: text("phone", &self.phone, base.map(|b| b.phone.clone()))?,
            email: text("email", &self.email, base.map(|b| b.email.clone()))?,
            project: text("project", &self.project, base.map(|b| b.project.clone()))?,
            invoice_amount: field(
                "invoice-amount",
                &self.invoice_amount,
                base.map(|b| b.invoice_amount),
                |v| parse_amount("invoice_amount", v),
            )?,
            deadline: field("deadline", &self.deadline, base.map(|b| b.deadline), |v| {
                parse_date("deadline", v)
            })?,
            created_at: base.map(|b| b.created_at.clone()).unwrap_or_default(),
            updated_at: base.map(|b| b.updated_at.clone()).unwrap_or_default(),
        })
    }
}

impl Form for TaskArgs {
    type Output = Task;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(&self, base: Option<&Task>) -> AppResult<Task> {
        // description is optional, empty on add
        let description = match &self.description {
            Some(d) => d.trim().to_string(),
            None => base.map(|b| b.description.clone()).unwrap_or_default(),
        };

        Ok(Task {
            id: self.id.trim().to_string(),
            name: text("name", &self.name, base.map(|b| b.name.clone()))?,
            description,
            status: field("status", &self.status, base.map(|b| b.status), task_status)?,
            priority: field("priority", &self.priority, base.map(|b| b.priority), task_priority)?,
            start_date: field("start-date", &self.start_date, base.map(|b| b.start_date), |v| {
                parse_date("start_date", v)
            })?,
            end_date: field("end-date", &self.end_date, base.map(|b| b.end_date), |v| {
                parse_date("end_date", v)
            })?,
            assigned_to: text(
                "assigned-to",
                &self.assigned_to,
                base.map(|b| b.assigned_to.clone()),
            )?,
            created_at: base.map(|b| b.created_at.clone()).unwrap_or_default(),
            updated_at: base.map(|b| b.updated_at.clone()).unwrap_or_default(),
        })
    }
}

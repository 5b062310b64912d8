use clap::ValueEnum;
use serde::Serialize;

/// The six record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Entity {
    #[value(alias = "invoices")]
    Invoice,
    #[value(alias = "employees")]
    Employee,
    #[value(alias = "materials")]
    Material,
    #[value(alias = "projects")]
    Project,
    #[value(alias = "clients")]
    Client,
    #[value(alias = "tasks")]
    Task,
}

impl Entity {
    pub const ALL: [Entity; 6] = [
        Entity::Invoice,
        Entity::Employee,
        Entity::Material,
        Entity::Project,
        Entity::Client,
        Entity::Task,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Entity::Invoice => "invoices",
            Entity::Employee => "employees",
            Entity::Material => "materials",
            Entity::Project => "projects",
            Entity::Client => "clients",
            Entity::Task => "tasks",
        }
    }

    /// Singular lowercase name used in messages and the audit log.
    pub fn label(&self) -> &'static str {
        match self {
            Entity::Invoice => "invoice",
            Entity::Employee => "employee",
            Entity::Material => "material",
            Entity::Project => "project",
            Entity::Client => "client",
            Entity::Task => "task",
        }
    }

    /// Title of the exported report (English, translated at render time).
    pub fn report_title(&self) -> &'static str {
        match self {
            Entity::Invoice => "Invoice Report",
            Entity::Employee => "Employee Report",
            Entity::Material => "Material Report",
            Entity::Project => "Project Report",
            Entity::Client => "Client Report",
            Entity::Task => "Task Report",
        }
    }
}

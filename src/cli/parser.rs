use crate::export::ExportFormat;
use crate::i18n::Language;
use crate::models::Entity;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for bizdesk
/// CLI application to manage business records with SQLite
#[derive(Parser)]
#[command(
    name = "bizdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage invoices, employees, materials, projects, clients and tasks from the terminal using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Display language for headers, statuses and chart titles
    #[arg(global = true, long = "lang", value_enum)]
    pub lang: Option<Language>,

    /// Disable colored output (same as NO_COLOR)
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "sample", help = "Load a small demonstration dataset")]
        sample: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "limit", help = "Only show the most recent N rows")]
        limit: Option<usize>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Zip the backup (Deflated)")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// List the records of one type
    List {
        #[arg(value_enum)]
        entity: Entity,

        #[arg(long, short, help = "Only rows where a cell contains TEXT (case-insensitive)")]
        search: Option<String>,

        #[arg(long, value_name = "COLUMN", help = "Sort by column (header or field name)")]
        sort: Option<String>,

        #[arg(long, requires = "sort", help = "Sort descending")]
        desc: bool,
    },

    /// Show a single record
    Show {
        #[arg(value_enum)]
        entity: Entity,

        id: String,
    },

    /// Add a new record
    Add {
        #[command(subcommand)]
        record: RecordInput,
    },

    /// Modify an existing record (only the given fields change)
    Edit {
        #[command(subcommand)]
        record: RecordInput,
    },

    /// Delete a record by ID
    Del {
        #[arg(value_enum)]
        entity: Entity,

        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Summary charts computed from the listed rows
    Stats {
        #[arg(value_enum)]
        entity: Entity,

        #[arg(long, short, help = "Only aggregate rows matching TEXT")]
        search: Option<String>,
    },

    /// Scoring heuristics (unpaid invoice, best employee, client, next task)
    Predict {
        #[arg(value_enum)]
        target: PredictTarget,

        #[arg(long, default_value_t = 1, help = "Number of ranked entries to show")]
        top: usize,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date (default: today)")]
        today: Option<String>,
    },

    /// Export records to a file
    Export {
        #[arg(value_enum)]
        entity: Entity,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Only export rows matching TEXT")]
        search: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Ask the configured LLM a question
    Chat {
        message: String,

        #[arg(long, value_enum, help = "Include this record table in the prompt")]
        context: Option<Entity>,
    },

    /// Send a notification email about a record
    Notify {
        #[arg(value_enum)]
        target: NotifyTarget,

        id: String,

        #[arg(long = "dry-run", help = "Print the payload instead of sending it")]
        dry_run: bool,
    },

    /// Talk to the task-tracking device
    Device {
        #[command(subcommand)]
        action: DeviceAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PredictTarget {
    #[value(alias = "invoices")]
    Invoice,
    #[value(alias = "employees")]
    Employee,
    #[value(alias = "clients")]
    Client,
    #[value(alias = "tasks")]
    Task,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotifyTarget {
    Client,
    Project,
    Employee,
}

#[derive(Subcommand)]
pub enum DeviceAction {
    /// Wait for TASK_COMPLETED and mark the task as Completed
    Listen {
        #[arg(long, help = "Serial device path (default: device.port)")]
        port: Option<String>,

        #[arg(long, help = "Task ID to complete")]
        task: String,
    },

    /// Send one NOTIFICATION line
    Notify {
        #[arg(long, help = "Serial device path (default: device.port)")]
        port: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RecordInput {
    Invoice(InvoiceArgs),
    Employee(EmployeeArgs),
    Material(MaterialArgs),
    Project(ProjectArgs),
    Client(ClientArgs),
    Task(TaskArgs),
}

#[derive(Args)]
pub struct InvoiceArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long, help = "Invoice number (INV-YYYY-NNN)")]
    pub number: Option<String>,

    #[arg(long, help = "Invoice date (YYYY-MM-DD)")]
    pub date: Option<String>,

    #[arg(long, help = "Amount, currency symbols and separators allowed")]
    pub amount: Option<String>,

    #[arg(long, help = "Paid, Pending or Overdue")]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct EmployeeArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,

    #[arg(long, help = "Hire date (YYYY-MM-DD)")]
    pub hire_date: Option<String>,
}

#[derive(Args)]
pub struct MaterialArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub supplier: Option<String>,

    #[arg(long)]
    pub unit_cost: Option<String>,

    #[arg(long, help = "Unit of measure (bag, m3, piece, ...)")]
    pub unit_type: Option<String>,

    #[arg(long)]
    pub stock: Option<String>,

    #[arg(long, help = "Path to a picture (png, jpg, jpeg, gif, bmp); empty to clear")]
    pub image: Option<String>,
}

#[derive(Args)]
pub struct ProjectArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub client_email: Option<String>,

    #[arg(long, alias = "start")]
    pub start_date: Option<String>,

    #[arg(long, alias = "end")]
    pub end_date: Option<String>,

    #[arg(long, help = "Planned, In Progress, Completed or On Hold")]
    pub status: Option<String>,

    #[arg(long)]
    pub budget: Option<String>,

    #[arg(long)]
    pub client_name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Args)]
pub struct ClientArgs {
    #[arg(long, help = "Client ID (C + 3 digits)")]
    pub id: String,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub project: Option<String>,

    #[arg(long, alias = "amount")]
    pub invoice_amount: Option<String>,

    #[arg(long, help = "Deadline (YYYY-MM-DD)")]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct TaskArgs {
    #[arg(long, help = "Task ID (T + 3 digits)")]
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, help = "To Do, In Progress or Completed")]
    pub status: Option<String>,

    #[arg(long, help = "Low, Medium or High")]
    pub priority: Option<String>,

    #[arg(long, alias = "start")]
    pub start_date: Option<String>,

    #[arg(long, alias = "end")]
    pub end_date: Option<String>,

    #[arg(long)]
    pub assigned_to: Option<String>,
}

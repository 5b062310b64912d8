//! Closed vocabularies used by invoices, projects and tasks.
//!
//! Parsing is case-insensitive and also accepts the French display labels,
//! so a value copied from a `--lang fr` listing can be fed back to the CLI.

use crate::i18n;
use serde::Serialize;

fn normalize(s: &str) -> String {
    let english = i18n::to_english(s).unwrap_or(s);
    english
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [Self::Paid, Self::Pending, Self::Overdue];

    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Planned,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "planned" => Some(Self::Planned),
            "in progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "on hold" => Some(Self::OnHold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::ToDo, Self::InProgress, Self::Completed];

    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "to do" | "todo" => Some(Self::ToDo),
            "in progress" => Some(Self::InProgress),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Weight used by the task prioritization score.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
        }
    }
}

/// Comma separated list of the English labels, for error messages.
pub fn allowed<T, F>(all: &[T], label: F) -> String
where
    F: Fn(&T) -> &'static str,
{
    all.iter().map(label).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(InvoiceStatus::parse("PENDING"), Some(InvoiceStatus::Pending));
        assert_eq!(ProjectStatus::parse("in-progress"), Some(ProjectStatus::InProgress));
        assert_eq!(TaskStatus::parse("to_do"), Some(TaskStatus::ToDo));
        assert_eq!(TaskPriority::parse(" high "), Some(TaskPriority::High));
    }

    #[test]
    fn parse_accepts_french_labels() {
        assert_eq!(InvoiceStatus::parse("En retard"), Some(InvoiceStatus::Overdue));
        assert_eq!(TaskStatus::parse("terminé"), Some(TaskStatus::Completed));
        assert_eq!(TaskPriority::parse("Moyenne"), Some(TaskPriority::Medium));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(InvoiceStatus::parse("Cancelled"), None);
        assert_eq!(TaskPriority::parse("urgent"), None);
    }

    #[test]
    fn allowed_lists_english_labels() {
        assert_eq!(
            allowed(&InvoiceStatus::ALL, InvoiceStatus::as_str),
            "Paid, Pending, Overdue"
        );
    }
}

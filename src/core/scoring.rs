//! Ranking heuristics. Fixed linear formulas, nothing is learned or stored.
//!
//! Every function takes `today` explicitly so results only depend on the
//! inputs. Equal scores are ordered by id.

use crate::models::status::InvoiceStatus;
use crate::models::{Client, Employee, Invoice, Record, Task};
use crate::utils::date::days_between;
use chrono::NaiveDate;

/// Days within which a deadline starts adding urgency.
pub const URGENCY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'a, T> {
    pub record: &'a T,
    pub score: f64,
}

fn rank<'a, T, F>(items: impl Iterator<Item = &'a T>, score: F) -> Vec<Ranked<'a, T>>
where
    T: Record + 'a,
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<Ranked<'a, T>> = items
        .map(|record| Ranked {
            record,
            score: score(record),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.record.id().cmp(b.record.id()))
    });
    ranked
}

/// 0 when the deadline is 30+ days away, 30 when it is today or past.
fn urgency(today: NaiveDate, deadline: NaiveDate) -> f64 {
    let days_left = days_between(today, deadline);
    (URGENCY_WINDOW_DAYS - days_left).clamp(0, URGENCY_WINDOW_DAYS) as f64
}

/// The pending invoice with the largest positive amount.
pub fn highest_pending_invoice(invoices: &[Invoice]) -> Option<&Invoice> {
    let mut best: Option<&Invoice> = None;
    for inv in invoices {
        if inv.status != InvoiceStatus::Pending || inv.amount <= 0.0 {
            continue;
        }
        match best {
            Some(b) if inv.amount < b.amount => {}
            Some(b) if inv.amount == b.amount && inv.id >= b.id => {}
            _ => best = Some(inv),
        }
    }
    best
}

pub fn tenure_years(hire_date: NaiveDate, today: NaiveDate) -> f64 {
    days_between(hire_date, today).max(0) as f64 / 365.25
}

/// `tenure_years * 0.6 + (salary / 1000) * 0.4`
pub fn employee_score(e: &Employee, today: NaiveDate) -> f64 {
    tenure_years(e.hire_date, today) * 0.6 + (e.salary / 1000.0) * 0.4
}

pub fn rank_employees(employees: &[Employee], today: NaiveDate) -> Vec<Ranked<'_, Employee>> {
    rank(employees.iter(), |e| employee_score(e, today))
}

/// `(invoice_amount / 1000) * 0.7 + urgency * 0.3`
pub fn client_score(c: &Client, today: NaiveDate) -> f64 {
    (c.invoice_amount / 1000.0) * 0.7 + urgency(today, c.deadline) * 0.3
}

pub fn rank_clients(clients: &[Client], today: NaiveDate) -> Vec<Ranked<'_, Client>> {
    rank(clients.iter(), |c| client_score(c, today))
}

/// `priority_weight * 0.6 + (urgency / 10) * 0.4`
pub fn task_score(t: &Task, today: NaiveDate) -> f64 {
    t.priority.weight() * 0.6 + (urgency(today, t.end_date) / 10.0) * 0.4
}

/// Open tasks only, most pressing first.
pub fn rank_tasks(tasks: &[Task], today: NaiveDate) -> Vec<Ranked<'_, Task>> {
    rank(
        tasks.iter().filter(|t| t.status.is_open()),
        |t| task_score(t, today),
    )
}

use crate::cli::parser::{Commands, PredictTarget};
use crate::config::Config;
use crate::core::scoring::{self, Ranked};
use crate::core::validate::parse_date;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::models::{Client, Employee, Invoice, Record, Task};
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Predict {
        target,
        top,
        today,
    } = cmd
    {
        let today = match today {
            Some(d) => parse_date("today", d)?,
            None => date::today(),
        };
        let top = (*top).max(1);
        let currency = cfg.currency_symbol.as_str();
        let pool = DbPool::new(&cfg.database)?;

        match target {
            PredictTarget::Invoice => {
                header("Highest pending invoice");
                let invoices = load_all::<Invoice>(&pool)?;
                match scoring::highest_pending_invoice(&invoices) {
                    Some(inv) => println!(
                        "{} ({}) : {}",
                        inv.number,
                        inv.id,
                        format_currency(inv.amount, currency)
                    ),
                    None => info("No pending invoices"),
                }
            }

            PredictTarget::Employee => {
                header("Best employee");
                let employees = load_all::<Employee>(&pool)?;
                print_ranked(&scoring::rank_employees(&employees, today), top, |e| {
                    format!("{} ({}, {})", e.full_name(), e.position, e.department)
                });
            }

            PredictTarget::Client => {
                header("Most important client");
                let clients = load_all::<Client>(&pool)?;
                print_ranked(&scoring::rank_clients(&clients, today), top, |c| {
                    format!(
                        "{} ({}, due {})",
                        c.full_name(),
                        format_currency(c.invoice_amount, currency),
                        c.deadline
                    )
                });
            }

            PredictTarget::Task => {
                header("Next task");
                let tasks = load_all::<Task>(&pool)?;
                print_ranked(&scoring::rank_tasks(&tasks, today), top, |t| {
                    format!(
                        "{} [{}] ends {} ({})",
                        t.name,
                        t.priority.as_str(),
                        t.end_date,
                        t.assigned_to
                    )
                });
            }
        }
    }

    Ok(())
}

fn print_ranked<T: Record>(ranked: &[Ranked<'_, T>], top: usize, describe: impl Fn(&T) -> String) {
    if ranked.is_empty() {
        info("No candidates.");
        return;
    }
    for (pos, r) in ranked.iter().take(top).enumerate() {
        println!(
            "{:>2}. {} {}  score {:.2}",
            pos + 1,
            r.record.id(),
            describe(r.record),
            r.score
        );
    }
}

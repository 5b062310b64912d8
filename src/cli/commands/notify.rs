use crate::cli::parser::{Commands, NotifyTarget};
use crate::config::Config;
use crate::core::crud::CrudLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::integrations::email::{self, Notifiable};
use crate::models::{Client, Employee, Project};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify {
        target,
        id,
        dry_run,
    } = cmd
    {
        let id = id.trim();
        let pool = DbPool::new(&cfg.database)?;
        let currency = cfg.currency_symbol.as_str();

        let (label, params) = match target {
            NotifyTarget::Client => {
                ("client", CrudLogic::load::<Client>(&pool, id)?.message(currency))
            }
            NotifyTarget::Project => {
                ("project", CrudLogic::load::<Project>(&pool, id)?.message(currency))
            }
            NotifyTarget::Employee => {
                ("employee", CrudLogic::load::<Employee>(&pool, id)?.message(currency))
            }
        };

        if params.to_email.trim().is_empty() {
            return Err(AppError::validation(
                "email",
                format!("{} '{}' has no email address", label, id),
            ));
        }

        if *dry_run {
            // no credentials needed to preview
            let preview = serde_json::to_string_pretty(&params)
                .map_err(|e| AppError::Other(e.to_string()))?;
            info(format!(
                "Email to {} <{}> (not sent):",
                params.to_name, params.to_email
            ));
            println!("{}", preview);
            return Ok(());
        }

        let to = params.to_email.clone();
        let payload = email::build_payload(&cfg.email, params)?;
        email::send(&cfg.email, &payload)?;
        success(format!("Notification sent to {}.", to));

        if let Err(e) = audit(
            &pool.conn,
            "notify",
            &format!("{} {}", label, id),
            &format!("Email sent to {}", to),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}

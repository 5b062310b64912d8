use crate::cli::forms::Form;
use crate::cli::parser::{Commands, RecordInput};
use crate::config::Config;
use crate::core::crud::CrudLogic;
use crate::core::validate::Validate;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::integrations::device;
use crate::models::Record;
use crate::ui::messages::{info, success, warning};

/// Handle `add` and `edit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (record, editing) = match cmd {
        Commands::Add { record } => (record, false),
        Commands::Edit { record } => (record, true),
        _ => return Ok(()),
    };

    let pool = DbPool::new(&cfg.database)?;

    match record {
        RecordInput::Invoice(args) => save(&pool, args, editing),
        RecordInput::Employee(args) => save(&pool, args, editing),
        RecordInput::Material(args) => save(&pool, args, editing),
        RecordInput::Project(args) => save(&pool, args, editing),
        RecordInput::Client(args) => save(&pool, args, editing),
        RecordInput::Task(args) => {
            save(&pool, args, editing)?;
            if !editing {
                notify_device(cfg);
            }
            Ok(())
        }
    }
}

fn save<F>(pool: &DbPool, form: &F, editing: bool) -> AppResult<()>
where
    F: Form,
    F::Output: Validate,
{
    let label = <F::Output as Record>::ENTITY.label();

    if editing {
        let current: F::Output = CrudLogic::load(pool, form.id().trim())?;
        let record = form.build(Some(&current))?;
        CrudLogic::edit(pool, &record)?;
        success(format!("Updated {} '{}'.", label, record.id()));
    } else {
        let record = form.build(None)?;
        CrudLogic::add(pool, &record)?;
        success(format!("Added {} '{}'.", label, record.id()));
    }
    Ok(())
}

/// A new task pings the board. Failures never undo the insert.
fn notify_device(cfg: &Config) {
    match device::notify_configured(&cfg.device) {
        Ok(true) => info("Device notified."),
        Ok(false) => {}
        Err(e) => warning(format!("Device notification failed: {}", e)),
    }
}

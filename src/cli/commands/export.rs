use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        entity,
        format,
        file,
        search,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let written = ExportLogic::export(
            &pool,
            *entity,
            *format,
            file,
            search.as_deref(),
            *force,
            &cfg.row_style(),
        )?;

        if written > 0
            && let Err(e) = audit(
                &pool.conn,
                "export",
                file,
                &format!(
                    "{} {} row(s) exported as {}",
                    written,
                    entity.label(),
                    format.as_str()
                ),
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::sample::load_sample_data;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with every pending migration
///  - optionally a small demonstration dataset
pub fn handle(cli: &Cli) -> AppResult<()> {
    let sample = matches!(cli.command, Commands::Init { sample: true });

    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    info("Initializing bizdesk…");
    info(format!("Database : {}", db_path));

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", db_path));

    // internal log is best effort
    if let Err(e) = log::audit(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    if sample {
        let inserted = load_sample_data(&pool)?;
        success(format!("{} sample records loaded.", inserted));
    }

    success("bizdesk initialization completed!");
    Ok(())
}

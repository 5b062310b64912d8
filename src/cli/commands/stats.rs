use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::charts;
use crate::core::listing::Listing;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::i18n::tr;
use crate::ui::chart;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { entity, search } = cmd {
        let style = cfg.row_style();
        let pool = DbPool::new(&cfg.database)?;

        let mut listing = Listing::load(&pool, *entity, &style)?;
        if let Some(needle) = search {
            listing.search(needle);
        }

        header(tr(style.lang, entity.report_title()));

        if listing.is_empty() {
            info(format!("No {} records to chart.", entity.label()));
            return Ok(());
        }

        for spec in charts::specs(*entity) {
            let data = charts::aggregate(&spec, &listing.keys, &listing.rows, &listing.currency)?;
            println!("{}", chart::render(&data, style.lang, &style.currency));
        }
    }

    Ok(())
}

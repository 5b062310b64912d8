use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::listing::Listing;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::integrations::chat;
use crate::ui::messages::info;

const WRAP_WIDTH: usize = 88;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chat { message, context } = cmd {
        let context_text = match context {
            Some(entity) => {
                let style = cfg.row_style();
                let pool = DbPool::new(&cfg.database)?;
                let listing = Listing::load(&pool, *entity, &style)?;
                info(format!(
                    "Including {} {} row(s) as context.",
                    listing.rows.len(),
                    entity.label()
                ));
                Some(listing.to_plain_text(style.lang))
            }
            None => None,
        };

        let prompt = chat::build_prompt(message, context_text.as_deref());
        let reply = chat::ask(&cfg.chat, &prompt)?;

        println!();
        for line in textwrap::wrap(reply.trim(), WRAP_WIDTH) {
            println!("{}", line);
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::listing::Listing;
use crate::db::pool::DbPool;
use crate::db::queries::find;
use crate::errors::{AppError, AppResult};
use crate::i18n::tr;
use crate::models::{Client, Employee, Entity, Invoice, Material, Project, Record, Task};
use crate::ui::messages::{header, info};
use crate::utils::colors;
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let style = cfg.row_style();

    match cmd {
        Commands::List {
            entity,
            search,
            sort,
            desc,
        } => {
            let pool = DbPool::new(&cfg.database)?;
            let mut listing = Listing::load(&pool, *entity, &style)?;

            if let Some(needle) = search {
                listing.search(needle);
            }
            if let Some(column) = sort {
                listing.sort_by(column, *desc)?;
            }

            header(tr(style.lang, entity.report_title()));

            if listing.is_empty() {
                info(format!("No {} records.", entity.label()));
                return Ok(());
            }

            print!("{}", listing.to_table(style.lang).render());
            println!("{} row(s)", listing.rows.len());
        }

        Commands::Show { entity, id } => {
            let pool = DbPool::new(&cfg.database)?;
            let listing = Listing::load(&pool, *entity, &style)?;

            // the id is always the first display column
            let row = listing
                .rows
                .iter()
                .find(|r| r.first().map(|c| c == id.trim()).unwrap_or(false))
                .ok_or_else(|| AppError::not_found(entity.label(), id))?;

            let mut headers = listing.headers(style.lang);
            let mut cells = row.clone();
            if let Some((created, updated)) = timestamps(&pool, *entity, id.trim())? {
                headers.extend([tr(style.lang, "Created"), tr(style.lang, "Updated")]);
                cells.extend([created, updated]);
            }
            let w = headers.iter().map(|h| h.width()).max().unwrap_or(0);

            header(format!("{} {}", entity.label(), id));
            for (h, cell) in headers.iter().zip(&cells) {
                println!("{} : {}", pad_right(h, w), colors::colorize_cell(cell, cell));
            }
        }

        _ => {}
    }

    Ok(())
}

/// `(created_at, updated_at)` of a record whose table keeps them.
fn timestamps(pool: &DbPool, entity: Entity, id: &str) -> AppResult<Option<(String, String)>> {
    fn of<R: Record>(pool: &DbPool, id: &str) -> AppResult<Option<(String, String)>> {
        Ok(find::<R>(pool, id)?
            .and_then(|r| r.timestamps().map(|(c, u)| (c.to_string(), u.to_string())))
            .filter(|(c, _)| !c.is_empty()))
    }

    match entity {
        Entity::Invoice => of::<Invoice>(pool, id),
        Entity::Employee => of::<Employee>(pool, id),
        Entity::Material => of::<Material>(pool, id),
        Entity::Project => of::<Project>(pool, id),
        Entity::Client => of::<Client>(pool, id),
        Entity::Task => of::<Task>(pool, id),
    }
}

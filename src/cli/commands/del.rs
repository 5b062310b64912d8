use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::crud::CrudLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Client, Employee, Entity, Invoice, Material, Project, Task};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { entity, id, yes } = cmd {
        let id = id.trim();

        //
        // Confirmation prompt
        //
        if !*yes
            && !confirm(&format!(
                "Delete {} '{}'? This action is irreversible.",
                entity.label(),
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let pool = DbPool::new(&cfg.database)?;

        match entity {
            Entity::Invoice => CrudLogic::delete::<Invoice>(&pool, id)?,
            Entity::Employee => CrudLogic::delete::<Employee>(&pool, id)?,
            Entity::Material => CrudLogic::delete::<Material>(&pool, id)?,
            Entity::Project => CrudLogic::delete::<Project>(&pool, id)?,
            Entity::Client => CrudLogic::delete::<Client>(&pool, id)?,
            Entity::Task => CrudLogic::delete::<Task>(&pool, id)?,
        }

        success(format!("{} '{}' has been deleted.", entity.label(), id));
    }

    Ok(())
}

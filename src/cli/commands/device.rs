use crate::cli::parser::{Commands, DeviceAction};
use crate::config::Config;
use crate::core::crud::CrudLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::integrations::device;
use crate::models::Task;
use crate::ui::messages::{info, success, warning};
use std::io::BufReader;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Device { action } = cmd {
        match action {
            DeviceAction::Listen { port, task } => {
                let task_id = task.trim();
                let port = device::resolve_port(port.as_deref(), &cfg.device)?;
                let line = device::LineSettings::from_config(&cfg.device)?;
                let pool = DbPool::new(&cfg.database)?;

                // fail before blocking on the port
                let current: Task = CrudLogic::load(&pool, task_id)?;
                info(format!(
                    "Waiting for {} on {} ({} baud) for task {} ({})…",
                    device::TASK_COMPLETED,
                    port,
                    line.baud,
                    current.id,
                    current.name
                ));

                let reader = BufReader::new(device::open_for_reading(&port, line)?);
                let completed = device::wait_for_completion(reader, |msg| {
                    warning(format!("Ignoring unknown device message: {}", msg))
                })?;

                if completed {
                    let done = CrudLogic::complete_task(&pool, task_id)?;
                    success(format!("Task {} marked {}.", done.id, done.status.as_str()));
                } else {
                    warning("Device closed the line before signalling completion.");
                }
            }

            DeviceAction::Notify { port } => {
                let port = device::resolve_port(port.as_deref(), &cfg.device)?;
                let line = device::LineSettings::from_config(&cfg.device)?;
                let mut out = device::open_for_writing(&port, line)?;
                device::notify(&mut out)?;
                success(format!("{} sent to {}.", device::NOTIFICATION, port));
            }
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddOutcome};
use crate::core::project::{find_project, select_or_create};
use crate::errors::AppResult;
use crate::ui::prompt::Console;
use chrono::Local;
use tracing::debug;

/// Record one work session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { project } = cmd {
        let dir = cfg.ledger_path();
        let mut console = Console::stdio();

        //
        // 1. Resolve ledger + hourly rate
        //
        let (ledger, rate) = match project {
            Some(name) => {
                let ledger = find_project(&dir, name)?;
                let rate = ledger.resolve_hourly_rate(&mut console, cfg.default_hourly_rate)?;
                (ledger, rate)
            }
            None => select_or_create(&dir, &mut console, cfg.default_hourly_rate)?,
        };
        debug!(ledger = %ledger.path().display(), rate, "project resolved");

        //
        // 2. Run the add flow once
        //
        let now = Local::now().naive_local();
        let outcome = AddLogic::apply(
            &ledger,
            rate,
            &mut console,
            cfg.alert_threshold_minutes,
            now,
        )?;

        if outcome == AddOutcome::Cancelled {
            debug!(ledger = %ledger.path().display(), "add flow cancelled");
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::project::{find_project, list_projects};
use crate::core::totals::{UnpaidTotals, unpaid_totals};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::summary::print_pending;

/// Print the unpaid summary of one project, or of all of them.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { project } = cmd {
        let dir = cfg.ledger_path();

        if let Some(name) = project {
            let ledger = find_project(&dir, name)?;
            print_pending(&ledger.name(), &unpaid_totals(&ledger)?);
            return Ok(());
        }

        let projects = list_projects(&dir)?;
        if projects.is_empty() {
            info(format!("Nenhum projeto encontrado em {}", dir.display()));
            return Ok(());
        }

        let mut grand = UnpaidTotals::default();
        for file_name in &projects {
            let ledger = Ledger::new(dir.join(file_name));
            let totals = unpaid_totals(&ledger)?;
            print_pending(file_name, &totals);
            grand.minutes += totals.minutes;
            grand.value += totals.value;
        }

        if projects.len() > 1 {
            print_pending("(todos)", &grand);
        }
    }

    Ok(())
}

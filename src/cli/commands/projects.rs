use crate::config::Config;
use crate::core::duration;
use crate::core::ledger::Ledger;
use crate::core::project::list_projects;
use crate::core::totals::unpaid_totals;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::format_reais;
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

/// List every ledger in the configured directory.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let dir = cfg.ledger_path();
    let projects = list_projects(&dir)?;

    if projects.is_empty() {
        info(format!("Nenhum projeto encontrado em {}", dir.display()));
        return Ok(());
    }

    let name_width = projects
        .iter()
        .map(|p| p.width())
        .max()
        .unwrap_or(0)
        .max("Projeto".width());

    header("Projetos");
    println!(
        "{}  {}  {}  {}",
        pad_right("Projeto", name_width),
        pad_right("Valor-hora", 14),
        pad_right("Não pago (h)", 12),
        "Não pago (R$)"
    );

    for file_name in &projects {
        let ledger = Ledger::new(dir.join(file_name));
        let rate = ledger
            .read_hourly_rate()?
            .map(format_reais)
            .unwrap_or_else(|| "-".to_string());
        let totals = unpaid_totals(&ledger)?;

        println!(
            "{}  {}  {}  {}",
            pad_right(file_name, name_width),
            pad_right(&rate, 14),
            pad_right(&duration::format(totals.minutes), 12),
            format_reais(totals.value)
        );
    }

    Ok(())
}

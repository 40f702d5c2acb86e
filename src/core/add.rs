use crate::core::entry::EntryBuilder;
use crate::core::ledger::Ledger;
use crate::core::totals::unpaid_totals;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::ui::prompt::{self, Prompt};
use crate::ui::summary::{print_entry, print_pending};
use chrono::NaiveDateTime;
use tracing::info;

/// How a single add run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Row with this `n` was written.
    Saved(u64),
    /// Operator aborted; the ledger was not touched.
    Cancelled,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Run the add-entry flow once against `ledger`.
    ///
    /// Nothing is written unless the operator confirms the final preview.
    pub fn apply(
        ledger: &Ledger,
        hourly_rate: f64,
        prompt: &mut dyn Prompt,
        alert_threshold: i64,
        now: NaiveDateTime,
    ) -> AppResult<AddOutcome> {
        header(format!("Novo Apontamento de Horas ({})", ledger.name()));

        // ------------------------------------------------
        // 1️⃣ ACTIVITY
        // ------------------------------------------------
        let activity = prompt.ask("Atividade: ")?;
        if activity.is_empty() {
            warning("Descrição obrigatória. Operação cancelada.");
            return Ok(AddOutcome::Cancelled);
        }

        // ------------------------------------------------
        // 2️⃣ DURATION (with alert gate)
        // ------------------------------------------------
        let minutes = prompt::ask_duration(prompt, alert_threshold)?;

        // ------------------------------------------------
        // 3️⃣ DRAFT + CONFIRMATION
        // ------------------------------------------------
        let id = ledger.next_id()?;
        let row = EntryBuilder::new(hourly_rate).build(id, &activity, minutes, now)?;

        print_entry(&row, "Pré-visualização do registro", false);
        if !prompt::confirm(prompt, "Confirmar gravação?")? {
            warning("Operação cancelada. Nenhum dado foi salvo.");
            return Ok(AddOutcome::Cancelled);
        }

        // ------------------------------------------------
        // 4️⃣ PERSIST + REPORT
        // ------------------------------------------------
        ledger.append(&row)?;
        info!(ledger = %ledger.path().display(), n = id, minutes, "entry saved");
        success(format!("Apontamento salvo em {}", ledger.name()));

        let totals = unpaid_totals(ledger)?;
        print_pending(&ledger.name(), &totals);

        Ok(AddOutcome::Saved(id))
    }
}

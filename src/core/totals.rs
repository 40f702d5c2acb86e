use crate::core::ledger::Ledger;
use crate::errors::AppResult;

/// Sum of everything not yet marked as paid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnpaidTotals {
    pub minutes: i64,
    pub value: f64,
}

/// Totals over rows whose `pago` is not "sim" (any case).
/// Unparsable durations or values contribute zero; a missing ledger is (0, 0.0).
pub fn unpaid_totals(ledger: &Ledger) -> AppResult<UnpaidTotals> {
    let totals = ledger
        .rows()?
        .iter()
        .filter(|row| !row.is_paid())
        .fold(UnpaidTotals::default(), |acc, row| UnpaidTotals {
            minutes: acc.minutes + row.minutes().unwrap_or(0),
            value: acc.value + row.value().unwrap_or(0.0),
        });
    Ok(totals)
}

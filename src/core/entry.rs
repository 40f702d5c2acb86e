use crate::core::duration;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{LedgerRow, TIMESTAMP_FORMAT, UNPAID};
use crate::utils::round2;
use chrono::{Duration, NaiveDateTime};

/// Builds ledger rows for one project at a fixed hourly rate.
pub struct EntryBuilder {
    hourly_rate: f64,
}

impl EntryBuilder {
    pub fn new(hourly_rate: f64) -> Self {
        Self { hourly_rate }
    }

    /// Draft row for a session of `minutes` ending at `now`.
    ///
    /// `activity` is trimmed and must not be blank.
    pub fn build(
        &self,
        id: u64,
        activity: &str,
        minutes: i64,
        now: NaiveDateTime,
    ) -> AppResult<LedgerRow> {
        let activity = activity.trim();
        if activity.is_empty() {
            return Err(AppError::EmptyActivity);
        }

        let end = now;
        let start = Duration::try_minutes(minutes)
            .and_then(|d| end.checked_sub_signed(d))
            .ok_or_else(|| {
                AppError::Other(format!("duration of {minutes} minutes is out of range"))
            })?;

        Ok(LedgerRow {
            n: id.to_string(),
            tempo_total: duration::format(minutes),
            atividade: activity.to_string(),
            data_inicio: start.format(TIMESTAMP_FORMAT).to_string(),
            data_fim: end.format(TIMESTAMP_FORMAT).to_string(),
            valor_hora: format!("{:.2}", self.hourly_rate),
            valor: format!("{:.2}", self.value_for(minutes)),
            pago: UNPAID.to_string(),
        })
    }

    /// `minutes / 60 × rate`, rounded to cents.
    pub fn value_for(&self, minutes: i64) -> f64 {
        round2(minutes as f64 / 60.0 * self.hourly_rate)
    }
}

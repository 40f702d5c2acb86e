use crate::core::duration;
use crate::utils::parse_decimal;
use serde::{Deserialize, Serialize};

/// Canonical column order of every ledger file.
pub const FIELDNAMES: [&str; 8] = [
    "n",
    "tempo_total",
    "atividade",
    "data_inicio",
    "data_fim",
    "valor_hora",
    "valor",
    "pago",
];

pub const PAID: &str = "Sim";
pub const UNPAID: &str = "Não";

/// Timestamp layout of `data_inicio` / `data_fim` (local time, no zone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ledger row.
///
/// Fields are kept as the verbatim text found in the file so that a schema
/// migration can rewrite rows without altering them. Columns missing from an
/// older file deserialize as empty strings. Typed views are available through
/// the accessor methods, which never fail: unparsable values yield `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerRow {
    pub n: String,
    pub tempo_total: String,
    pub atividade: String,
    pub data_inicio: String,
    pub data_fim: String,
    pub valor_hora: String,
    pub valor: String,
    pub pago: String,
}

impl LedgerRow {
    pub fn id(&self) -> Option<u64> {
        self.n.trim().parse().ok()
    }

    pub fn minutes(&self) -> Option<i64> {
        duration::parse(&self.tempo_total)
    }

    pub fn value(&self) -> Option<f64> {
        parse_decimal(&self.valor)
    }

    pub fn hourly_rate(&self) -> Option<f64> {
        parse_decimal(&self.valor_hora)
    }

    pub fn has_hourly_rate(&self) -> bool {
        !self.valor_hora.trim().is_empty()
    }

    pub fn is_paid(&self) -> bool {
        self.pago.trim().eq_ignore_ascii_case(PAID)
    }

    /// Fields in `FIELDNAMES` order.
    pub fn to_record(&self) -> [&str; 8] {
        [
            self.n.as_str(),
            self.tempo_total.as_str(),
            self.atividade.as_str(),
            self.data_inicio.as_str(),
            self.data_fim.as_str(),
            self.valor_hora.as_str(),
            self.valor.as_str(),
            self.pago.as_str(),
        ]
    }
}

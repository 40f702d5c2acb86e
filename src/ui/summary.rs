//! Boxed summaries printed by the add flow and the report commands.

use crate::core::duration;
use crate::core::totals::UnpaidTotals;
use crate::models::LedgerRow;
use crate::ui::messages::{rule, section};
use crate::utils::formatting::pad_right;
use crate::utils::{format_reais, parse_decimal};

fn line(label: &str, width: usize, value: &str) {
    println!("{}: {}", pad_right(label, width), value);
}

pub fn print_entry(row: &LedgerRow, title: &str, show_paid: bool) {
    let value = parse_decimal(&row.valor).unwrap_or(0.0);

    section(title);
    line("ID (n)", 12, &row.n);
    line("Atividade", 12, &row.atividade);
    line("Tempo total", 12, &row.tempo_total);
    line("Início", 12, &row.data_inicio);
    line("Fim", 12, &row.data_fim);
    line("Valor (R$)", 12, &format_reais(value));
    if show_paid {
        line("Pago", 12, &row.pago);
    }
    rule();
}

pub fn print_pending(project: &str, totals: &UnpaidTotals) {
    section("Pendências");
    line("Projeto", 21, project);
    line("Total horas não pagas", 21, &duration::format(totals.minutes));
    line("Total não pago", 21, &format_reais(totals.value));
    rule();
}

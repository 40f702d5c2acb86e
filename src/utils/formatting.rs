//! Formatting utilities used for console output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad `s` on the right up to `width` terminal columns.
/// Accented labels ("Início") are measured by display width, not bytes.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Render a monetary value Brazilian style: `R$ 1.234,56`.
/// Console output only; ledgers store plain `1234.56`.
pub fn format_reais(value: f64) -> String {
    let plain = format!("{:.2}", value.abs());
    let (int_part, dec_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    // "-0,00" would be noise
    let sign = if value < 0.0 && plain != "0.00" { "-" } else { "" };
    format!("R$ {sign}{grouped},{dec_part}")
}

/// Round to cents, as stored in the ledger.
///
/// Goes through the decimal rendering so the result always agrees with the
/// `{:.2}` text written to the file.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Parse a user or ledger decimal accepting both "," and "." as separator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

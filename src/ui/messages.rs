//! Console status lines and section titles.
//!
//! Every status line is a coloured icon followed by plain text. Failures go
//! to stderr, everything else to stdout so prompts and reports stay together.

use crate::errors::AppError;
use crate::utils::formatting::bold;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Failure,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Failure => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Failure => "❌",
        }
    }
}

fn emit(tone: Tone, msg: &dyn fmt::Display) {
    let line = format!("{}{}{}{} {}", tone.color(), BOLD, tone.icon(), RESET, msg);
    if tone == Tone::Failure {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info(msg: impl fmt::Display) {
    emit(Tone::Info, &msg);
}

pub fn success(msg: impl fmt::Display) {
    emit(Tone::Success, &msg);
}

pub fn warning(msg: impl fmt::Display) {
    emit(Tone::Warning, &msg);
}

/// Recoverable input problem; the caller re-prompts.
pub fn error(msg: impl fmt::Display) {
    emit(Tone::Failure, &msg);
}

/// Final report of a failed run, printed as `Error: …`.
pub fn report(err: &AppError) {
    emit(Tone::Failure, &format_args!("Error: {err}"));
}

/// Menu title, e.g. `=== Projetos disponíveis ===`
pub fn header(title: impl fmt::Display) {
    println!("\n{}{}=== {} ==={}", Tone::Info.color(), BOLD, title, RESET);
}

/// Bold `Title:` plus a rule, opening a boxed summary.
pub fn section(title: &str) {
    println!("\n{}:", bold(title));
    rule();
}

pub fn rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

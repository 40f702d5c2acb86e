//! Interactive input: a line-oriented `Prompt` seam plus the validated
//! prompt loops built on it.

use crate::core::duration;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, warning};
use crate::utils::{parse_decimal, round2};
use std::io::{self, BufRead, Write};

/// Source of operator answers.
pub trait Prompt {
    /// Show `question` and return the trimmed answer.
    /// Fails with `AppError::InputClosed` once input is exhausted.
    fn ask(&mut self, question: &str) -> AppResult<String>;
}

/// Prompt over any reader/writer pair; `Console::stdio()` for the terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // keep the terminal tidy when input ends mid-prompt
            writeln!(self.output).ok();
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// `s` means yes; anything else is a no.
pub fn confirm(prompt: &mut dyn Prompt, question: &str) -> AppResult<bool> {
    let answer = prompt.ask(&format!("{question} (s/n): "))?;
    Ok(answer.to_lowercase() == "s")
}

/// Ask for an hourly rate until a positive number is given.
/// An empty answer accepts `suggested` when there is one.
pub fn ask_hourly_rate(prompt: &mut dyn Prompt, suggested: Option<f64>) -> AppResult<f64> {
    let question = match suggested {
        Some(v) => format!("Valor-hora (R$) [{v:.2}]: "),
        None => "Valor-hora (R$): ".to_string(),
    };

    loop {
        let answer = prompt.ask(&question)?;

        if answer.is_empty() {
            if let Some(v) = suggested {
                return Ok(round2(v));
            }
            error("Informe um valor maior que zero.");
            continue;
        }

        let Some(value) = parse_decimal(&answer) else {
            error("Valor inválido. Digite apenas números.");
            continue;
        };

        if value <= 0.0 {
            error("O valor deve ser maior que zero.");
            continue;
        }

        return Ok(round2(value));
    }
}

/// Ask for a duration until it parses. Durations above `alert_threshold`
/// minutes need a second confirmation; declining asks for the duration again.
pub fn ask_duration(prompt: &mut dyn Prompt, alert_threshold: i64) -> AppResult<i64> {
    loop {
        let answer = prompt.ask("Tempo (ex: 30m, 1h30m, 2h): ")?;

        let Some(minutes) = duration::parse(&answer) else {
            error("Tempo inválido. Use combinações como '1h30m', '45m' ou '2h'.");
            continue;
        };

        if minutes > alert_threshold {
            let hours = minutes as f64 / 60.0;
            let limit = alert_threshold as f64 / 60.0;
            warning(format!(
                "Alerta: tempo informado equivale a {hours:.2}h (> {limit:.0}h)."
            ));
            if !confirm(prompt, "Confirmar mesmo assim?")? {
                warning("Tempo descartado. Informe novamente.");
                continue;
            }
        }

        return Ok(minutes);
    }
}

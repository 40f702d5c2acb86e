#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use timeledger::errors::{AppError, AppResult};
use timeledger::ui::prompt::Prompt;

pub const HEADER: &str = "n,tempo_total,atividade,data_inicio,data_fim,valor_hora,valor,pago";

pub fn tl() -> Command {
    cargo_bin_cmd!("timeledger")
}

/// Binary invocation isolated from the user's config and ledgers.
pub fn tl_in(dir: &Path) -> Command {
    let mut cmd = tl();
    cmd.arg("--config")
        .arg(dir.join("no-such-config.conf"))
        .arg("--dir")
        .arg(dir);
    cmd
}

/// Write a ledger file with CRLF line endings, the way the tool writes them.
pub fn write_ledger(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\r\n");
    content.push_str("\r\n");
    fs::write(&path, content).expect("write ledger");
    path
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read ledger")
}

/// Prompt answering from a fixed script; records every question asked.
pub struct Script {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl Script {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for Script {
    fn ask(&mut self, question: &str) -> AppResult<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or(AppError::InputClosed)
    }
}

//! Projects are `<slug>.csv` ledgers living in one directory.

use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, success};
use crate::ui::prompt::{self, Prompt};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-]+").expect("valid regex"));
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

/// Turn a free-form project name into its ledger file name.
///
/// `"Cliente X / Site"` → `"cliente_x_site.csv"`. Returns `None` when nothing
/// usable is left.
pub fn normalize_project_name(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    let slug = NON_WORD.replace_all(&name, "_");
    let slug = UNDERSCORES.replace_all(&slug, "_");
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        return None;
    }

    if slug.ends_with(".csv") {
        Some(slug.to_string())
    } else {
        Some(format!("{slug}.csv"))
    }
}

/// Ledger file names in `dir`, sorted. A missing directory has no projects.
pub fn list_projects(dir: &Path) -> AppResult<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.to_lowercase().ends_with(".csv") {
            projects.push(name);
        }
    }
    projects.sort();
    Ok(projects)
}

/// Ledger of an existing project given by name or file name.
pub fn find_project(dir: &Path, name: &str) -> AppResult<Ledger> {
    let slug =
        normalize_project_name(name).ok_or_else(|| AppError::InvalidProjectName(name.to_string()))?;
    let ledger = Ledger::new(dir.join(&slug));
    if ledger.exists() {
        Ok(ledger)
    } else {
        Err(AppError::ProjectNotFound(slug))
    }
}

/// Ask for a new project name and rate, then create its empty ledger.
pub fn create_project(
    dir: &Path,
    prompt: &mut dyn Prompt,
    suggested_rate: f64,
) -> AppResult<(Ledger, f64)> {
    header("Criar novo projeto");

    loop {
        let typed = prompt.ask("Nome do projeto: ")?;
        let Some(file_name) = normalize_project_name(&typed) else {
            error("Nome inválido. Use letras, números, '-' ou '_'.");
            continue;
        };

        let ledger = Ledger::new(dir.join(&file_name));
        if ledger.path().exists() {
            error("Já existe um projeto com esse nome. Escolha outro.");
            continue;
        }

        let rate = prompt::ask_hourly_rate(prompt, Some(suggested_rate))?;
        ledger.create()?;
        success(format!("Projeto criado: {file_name}"));
        return Ok((ledger, rate));
    }
}

/// Numbered menu over the existing projects plus a "create" option.
/// With no projects at all it goes straight to creation.
pub fn select_or_create(
    dir: &Path,
    prompt: &mut dyn Prompt,
    suggested_rate: f64,
) -> AppResult<(Ledger, f64)> {
    loop {
        let projects = list_projects(dir)?;
        if projects.is_empty() {
            info("Nenhum projeto encontrado. Vamos criar o primeiro agora.");
            return create_project(dir, prompt, suggested_rate);
        }

        header("Projetos disponíveis");
        for (idx, name) in projects.iter().enumerate() {
            println!("{}. {}", idx + 1, name);
        }
        let create_option = projects.len() + 1;
        println!("{create_option}. Criar novo projeto");

        let answer = prompt.ask("Selecione uma opção: ")?;
        let Ok(choice) = answer.parse::<usize>() else {
            error("Informe o número da opção.");
            continue;
        };

        if (1..=projects.len()).contains(&choice) {
            let file_name = &projects[choice - 1];
            info(format!("Projeto selecionado: {file_name}"));
            let ledger = Ledger::new(dir.join(file_name));
            let rate = ledger.resolve_hourly_rate(prompt, suggested_rate)?;
            return Ok((ledger, rate));
        }
        if choice == create_option {
            return create_project(dir, prompt, suggested_rate);
        }

        error("Opção inválida. Tente novamente.");
    }
}

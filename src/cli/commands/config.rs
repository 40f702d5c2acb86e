use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        // ---- INIT ----
        if *init {
            if config_path.exists() {
                warning(format!(
                    "Configuration file already exists: {}",
                    config_path.display()
                ));
            } else {
                Config::default().save(config_path)?;
                success(format!("Config file: {}", config_path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{DEFAULT_DATE_FORMAT, is_valid_date_format};

use std::fs;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migration,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK / MIGRATE ----
        if *check && !is_valid_date_format(&cfg.date_format) {
            warning(format!(
                "date_format '{}' is not a valid strftime pattern, using '{}'",
                cfg.date_format, DEFAULT_DATE_FORMAT
            ));
        }

        if *check || *run_migration {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `rstreak init` to create it.",
                    path.display()
                ));
                return Ok(());
            }

            if *run_migration {
                let added = migrate::migrate_file(&path)?;
                if added.is_empty() {
                    info("Configuration file is already up to date.");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let content = fs::read_to_string(&path)?;
                let missing = migrate::missing_fields(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `rstreak config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let fallback = default_editor();
            let editor_to_use = editor.clone().unwrap_or_else(|| fallback.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, fallback
                    ));

                    match Command::new(&fallback).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            fallback
                        )),
                        Ok(_) | Err(_) => crate::ui::messages::error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            fallback
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}

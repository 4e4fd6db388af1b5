use crate::config::Config;
use crate::config::migrate::{check_config_file, migrate_config_file};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!("No configuration file at {} (defaults in use).", path.display()));
            return Ok(());
        }

        let missing = check_config_file(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
            info("Run `punchclock config --migrate` to add them with default values.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "No configuration file at {}; run `punchclock init` first.",
                path.display()
            )));
        }

        let added = migrate_config_file(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added fields: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Open the file in `editor`, then `$EDITOR`/`$VISUAL`, then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        for candidate in [requested.as_str(), default_editor.as_str()] {
            match Command::new(candidate).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{candidate}'"));
                    return Ok(());
                }
                _ => warning(format!("Editor '{candidate}' not available")),
            }
        }

        Err(AppError::Config(format!(
            "Failed to edit {} with '{}' or '{}'",
            path.display(),
            requested,
            default_editor
        )))
    }
}

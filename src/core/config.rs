use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        info(format!("Configuration file: {}", Config::config_file().display()));
        println!("\n{yaml}");
        Ok(())
    }

    /// Report keys missing from the configuration file. Returns them.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}, defaults are in use. Run `rstaffhours init`.",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let missing = Config::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing keys (defaults will be used): {}",
                missing.join(", ")
            ));
        }
        Ok(missing)
    }

    /// Open the configuration file in `editor`, `$EDITOR`/`$VISUAL`, or a
    /// platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{requested}'"));
                return Ok(());
            }
            _ if requested != default_editor => {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{default_editor}'"
                ));
            }
            _ => {
                return Err(AppError::Config(format!(
                    "failed to run editor '{requested}'"
                )));
            }
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{default_editor}'"
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to run fallback editor '{default_editor}'"
            ))),
        }
    }
}

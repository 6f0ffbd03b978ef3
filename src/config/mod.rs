mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{Config, ThemePreference};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Get the config directory path (~/.config/grade-report/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("grade-report"))
}

/// Get the default config file path (~/.config/grade-report/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/grade-report/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default location yields the built-in defaults.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => {
            let path = match get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    debug!("No default config location: {}", e);
                    return Ok(Config::default());
                }
            };
            if !path.exists() {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            read_config(&path)
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = env::temp_dir().join("grade_report_test_missing_config.yaml");
        let _ = fs::remove_file(&path);
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_load_theme_and_scoring() {
        let path = env::temp_dir().join("grade_report_test_load_config.yaml");
        fs::write(
            &path,
            r#"
theme: light
scoring:
  letter_grades:
    bands:
      - { min: 50, label: "Pass" }
    fallback: "Fail"
"#,
        )
        .unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.theme, ThemePreference::Light);
        let letters = config.scoring.unwrap().letter_grades.unwrap();
        assert_eq!(letters.bands[0].label, "Pass");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let path = env::temp_dir().join("grade_report_test_empty_config.yaml");
        fs::write(&path, "{}\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = env::temp_dir().join("grade_report_test_bad_config.yaml");
        fs::write(&path, "theme: [unclosed\n").unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let path = env::temp_dir().join("grade_report_test_theme_config.yaml");
        fs::write(&path, "theme: neon\n").unwrap();
        assert!(load_config(Some(path.clone())).is_err());
        let _ = fs::remove_file(&path);
    }
}

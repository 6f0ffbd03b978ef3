use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{get_config_path, Config};
use crate::scoring::ScoringConfig;

const HEADER: &str = "\
# grade-report configuration
#
# theme: auto | dark | light
# scoring.weights: per-tier subject weights (high = grades 9-12, low = grades 1-8)
# scoring.letter_grades / scoring.ranks: bands are checked from the highest
# threshold down; the first one met wins, otherwise the fallback applies.
";

/// Write a config file holding the built-in defaults.
///
/// Uses `path` if given, otherwise the default location. Refuses to replace
/// an existing file unless `force` is set. Returns the path written.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config {
        scoring: Some(ScoringConfig::builtin()),
        ..Config::default()
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    write_atomic(&config_path, &format!("{}\n{}", HEADER, yaml))?;
    Ok(config_path)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

use crate::error::{Result, ScorerError};
use crate::types::config::ScorerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "campaign-scorer.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".campaign-scorer/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/campaign-scorer/config.toml";

pub fn load_config(root: &Path) -> Result<ScorerConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Global, then project, then local overrides; missing files are skipped.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScorerConfig> {
    let candidates = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Value::Table(Map::new());
    let mut sources = Vec::new();
    for path in candidates {
        if merge_file_if_exists(&mut merged, &path)? {
            sources.push(path);
        }
    }

    let mut cfg: ScorerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScorerError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    cfg.sources = sources;
    Ok(cfg)
}

/// Runs before logging is configured, so it reports what it merged instead of logging.
fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScorerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

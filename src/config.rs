use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::UnknownPrefixPolicy;

/// Placeholder in `search_url` replaced by the encoded query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

const CONFIG_DIR_NAME: &str = "notch";
const CONFIG_FILE_NAME: &str = "config.json";
const LEGACY_FILE_NAME: &str = ".notch.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub aliases: AliasesConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DispatchConfig {
    #[serde(default)]
    pub unknown_prefix_policy: UnknownPrefixPolicy,
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

/// User alias entries, merged over the built-in tables for the current OS.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AliasesConfig {
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
    #[serde(default)]
    pub apps: BTreeMap<String, String>,
}

fn default_search_url() -> String {
    format!("https://www.google.com/search?q={}", QUERY_PLACEHOLDER)
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            unknown_prefix_policy: UnknownPrefixPolicy::default(),
            search_url: default_search_url(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let url = self.dispatch.search_url.trim();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            bail!("search_url must start with http:// or https://, got {:?}", url);
        }
        if !url.contains(QUERY_PLACEHOLDER) {
            bail!("search_url must contain the {} placeholder", QUERY_PLACEHOLDER);
        }
        for (section, table) in [
            ("settings", &self.aliases.settings),
            ("apps", &self.aliases.apps),
        ] {
            for (alias, target) in table {
                if alias.trim().is_empty() {
                    bail!("aliases.{} contains an empty alias", section);
                }
                if target.trim().is_empty() {
                    bail!("aliases.{}.{} has an empty target", section, alias);
                }
            }
        }
        Ok(())
    }
}

pub fn get_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        None => {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(LEGACY_FILE_NAME)
        }
    }
}

pub fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        load_and_validate_config(path)
    } else {
        let config = Config::default();
        save_config(&config, path)?;
        log::info!("Created default config at {}", path.display());
        Ok(config)
    }
}

/// Reads and validates the config file; used both at startup and on hot reload.
pub fn load_and_validate_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).context("failed to read config file")?;
    let config =
        serde_json::from_str::<Config>(&content).context("failed to parse config file")?;
    config.validate().context("invalid config file")?;
    Ok(config)
}

pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }
    }
    let content = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, content).context("failed to write config file")?;
    Ok(())
}

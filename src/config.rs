//! Configuration file support for aibom-policy.
//!
//! Provides YAML-based configuration through `aibom-policy.config.yml` files,
//! plus the merge of config values with command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "aibom-policy.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    /// Policy documents; relative entries are resolved against the config file's directory.
    pub policies: Option<Vec<PathBuf>>,
    pub output: Option<PathBuf>,
    pub no_color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl ConfigFile {
    /// Policy paths with relative entries anchored at the config file's directory
    pub fn policy_paths(&self) -> Vec<PathBuf> {
        self.policies
            .iter()
            .flatten()
            .map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    self.base_dir.join(path)
                }
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and 'format' is one of text, json or markdown.",
            path.display()
        )
    })?;
    config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    for (i, path) in config.policies.iter().flatten().enumerate() {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            bail!(
                "Invalid config: policies[{}] must not be empty.\n\n\
                 💡 Hint: Each policies entry must be a path to a policy document (e.g., \"policies/baseline.yaml\").",
                i
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective options for one run after merging CLI arguments over config values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub bom: PathBuf,
    pub policies: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub no_color: bool,
}

impl RunOptions {
    /// CLI values win; CLI policies replace config policies rather than extending them
    pub fn merge(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let Some(bom) = args.bom.clone() else {
            bail!("Missing required argument --bom <PATH>");
        };

        let policies = if !args.policies.is_empty() {
            args.policies.clone()
        } else {
            config.map(ConfigFile::policy_paths).unwrap_or_default()
        };

        let format = args
            .format
            .or_else(|| config.and_then(|c| c.format))
            .unwrap_or_default();

        let output = args
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()));

        let no_color = args.no_color || config.and_then(|c| c.no_color).unwrap_or(false);

        Ok(Self {
            bom,
            policies,
            format,
            output,
            no_color,
        })
    }
}

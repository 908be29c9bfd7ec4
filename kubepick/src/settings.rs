//! Optional launcher overrides for the kubeconfig directory, file
//! extension, and executable.
//!
//! Read from `$XDG_CONFIG_HOME/k9l/config.yml` (default
//! `~/.config/k9l/config.yml`). A missing file means defaults; CLI flags
//! win over anything set here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::*;

use crate::home_dir;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubeconfig_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k9s_bin: Option<String>,
}

impl Settings {
    pub fn read_from(path: impl AsRef<Path>) -> anyhow::Result<Settings> {
        Ok(serde_yaml::from_reader(
            fs::OpenOptions::new()
                .read(true)
                .open(path)
                .context("Opening launcher settings")?,
        )
        .context("Parsing launcher settings")?)
    }

    pub fn load() -> anyhow::Result<Settings> {
        let path = settings_path()?;
        if !path.exists() {
            return Ok(Settings::default());
        }
        Settings::read_from(path)
    }
}

pub fn settings_path() -> anyhow::Result<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => home_dir()?.join(".config"),
    };
    Ok(base.join("k9l").join("config.yml"))
}

pub mod complete;
pub mod launch;
pub mod scan;
pub mod settings;

use std::path::PathBuf;

use anyhow::Context as _;

pub use scan::*;

/// Extension a file must carry to count as a kubeconfig.
pub const DEFAULT_EXTENSION: &str = ".yml";

pub fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME").context("Reading HOME to find the user home directory")?;
    Ok(PathBuf::from(home))
}

/// Directory scanned for kubeconfig files, `~/.kubeconfig`.
pub fn kubeconfig_dir() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(".kubeconfig"))
}

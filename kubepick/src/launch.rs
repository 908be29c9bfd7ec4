use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context as _};

/// Executable handed the selected kubeconfig.
pub const K9S_BIN: &str = "k9s";

/// Path of the kubeconfig file for `selection`, with the extension added
/// back.
pub fn kubeconfig_path(dir: &Path, selection: &str, extension: &str) -> PathBuf {
    dir.join(format!("{selection}{extension}"))
}

/// Run `bin --kubeconfig <kubeconfig>`, inheriting stdio. A spawn failure
/// or non-zero exit becomes an error.
pub fn run_k9s(bin: &str, kubeconfig: &Path) -> anyhow::Result<()> {
    tracing::debug!(bin, kubeconfig = %kubeconfig.display(), "handing off");

    let status = Command::new(bin)
        .arg("--kubeconfig")
        .arg(kubeconfig)
        .status()
        .with_context(|| format!("Launching {bin}"))?;

    if !status.success() {
        bail!("{bin} exited with {status}");
    }

    Ok(())
}

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;
use console::style;
use tabular::{row, Table};

use kubepick::complete::{prompt_selection, ClusterComplete};
use kubepick::launch::{kubeconfig_path, run_k9s, K9S_BIN};
use kubepick::settings::Settings;
use kubepick::{kubeconfig_dir, scan_kubeconfigs, DEFAULT_EXTENSION};

#[derive(Parser, Debug)]
#[clap(name = "k9l", version, about = "Pick a kubeconfig and hand off to k9s")]
struct Cli {
    /// Cluster to launch directly, skipping the prompt.
    #[clap(value_name = "CLUSTER")]
    cluster: Option<String>,

    /// Directory holding kubeconfig files (default: ~/.kubeconfig).
    #[clap(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Kubeconfig file extension.
    #[clap(long, value_name = "EXT")]
    extension: Option<String>,

    /// Executable to hand off to.
    #[clap(long = "k9s-bin", value_name = "BIN")]
    k9s_bin: Option<String>,

    /// List available clusters and exit.
    #[clap(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;

    // CLI flags win over the settings file, settings over built-in defaults.
    let dir = match cli.dir.or(settings.kubeconfig_dir) {
        Some(dir) => dir,
        None => kubeconfig_dir()?,
    };
    let extension = cli
        .extension
        .or(settings.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let k9s_bin = cli
        .k9s_bin
        .or(settings.k9s_bin)
        .unwrap_or_else(|| K9S_BIN.to_string());

    tracing::debug!(dir = %dir.display(), %extension, bin = %k9s_bin, "resolved configuration");

    let names = scan_kubeconfigs(&dir, &extension)?;

    // region: list mode
    if cli.list {
        println!("Clusters in {}:", dir.display());
        let mut table = Table::new("{:<}  {:<}");
        for name in &names {
            let stem = name.strip_suffix(&extension).unwrap_or(name);
            let modified = match fs::metadata(dir.join(name)).and_then(|m| m.modified()) {
                Ok(time) => DateTime::<Local>::from(time)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                Err(_) => "-".to_string(),
            };
            table.add_row(row!(format!("🖥  {stem}"), modified));
        }
        print!("{table}");
        return Ok(());
    }
    // endregion

    let selection = match cli.cluster {
        Some(cluster) => cluster,
        None => {
            let complete = ClusterComplete::new(names, extension.clone());
            prompt_selection("Enter cluster name", &complete)?
        }
    };

    let kubeconfig = kubeconfig_path(&dir, &selection, &extension);

    println!("🐶 Handing off to {}...", style(&k9s_bin).bold());
    run_k9s(&k9s_bin, &kubeconfig)
}

use anyhow::Result;
use kubepick::{kubeconfig_dir, scan_kubeconfigs, DEFAULT_EXTENSION};

fn main() -> Result<()> {
    let dir = kubeconfig_dir()?;
    let names = scan_kubeconfigs(&dir, DEFAULT_EXTENSION)?;

    println!("{names:#?}");

    Ok(())
}

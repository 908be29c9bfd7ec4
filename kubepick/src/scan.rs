use std::fs;
use std::path::Path;

use anyhow::{bail, Context as _};

/// Names of the kubeconfig files in `dir`: plain files ending in
/// `extension`, sorted by name. Directories and other extensions are
/// skipped. Errors when `dir` is unreadable or nothing matches.
pub fn scan_kubeconfigs(dir: &Path, extension: &str) -> anyhow::Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Reading kubeconfig directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Reading kubeconfig directory {}", dir.display()))?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if !name.ends_with(extension) {
            continue;
        }
        names.push(name);
    }

    if names.is_empty() {
        bail!(
            "No kubeconfig files matching *{extension} found in {}",
            dir.display()
        );
    }

    names.sort_unstable();
    tracing::debug!(dir = %dir.display(), count = names.len(), "scanned kubeconfig directory");

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn test_root(name: &str) -> PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!("kubepick-scan-{name}-{nonce}"))
    }

    #[test]
    fn lists_matching_files_sorted() {
        let root = test_root("sorted");
        fs::create_dir_all(&root).expect("create dir");
        fs::write(root.join("b.yml"), "").expect("write b");
        fs::write(root.join("a.yml"), "").expect("write a");

        let names = scan_kubeconfigs(&root, ".yml").expect("scan");

        assert_eq!(names, vec!["a.yml".to_string(), "b.yml".to_string()]);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn skips_directories_and_other_extensions() {
        let root = test_root("filter");
        fs::create_dir_all(root.join("sub.yml")).expect("create sub dir");
        fs::write(root.join("a.yml"), "").expect("write a");
        fs::write(root.join("notes.txt"), "").expect("write txt");
        fs::write(root.join("c.yaml"), "").expect("write yaml");

        let names = scan_kubeconfigs(&root, ".yml").expect("scan");

        assert_eq!(names, vec!["a.yml".to_string()]);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let root = test_root("empty");
        fs::create_dir_all(&root).expect("create dir");

        let err = scan_kubeconfigs(&root, ".yml").unwrap_err();

        assert!(err.to_string().contains("No kubeconfig files"));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = test_root("missing");

        assert!(scan_kubeconfigs(&root, ".yml").is_err());
    }
}

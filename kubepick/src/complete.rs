use anyhow::Context as _;
use dialoguer::{Completion, Input};

/// Tab completion over the scanned kubeconfig file names.
pub struct ClusterComplete {
    names: Vec<String>,
    extension: String,
}

impl ClusterComplete {
    pub fn new(names: Vec<String>, extension: impl Into<String>) -> Self {
        Self {
            names,
            extension: extension.into(),
        }
    }

    /// Remainders of the candidate names starting with `line`, with the
    /// matched prefix and the file extension stripped. An empty line
    /// completes to nothing.
    pub fn suffixes(&self, line: &str) -> Vec<String> {
        if line.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter_map(|name| name.strip_prefix(line))
            .map(|rest| {
                rest.strip_suffix(self.extension.as_str())
                    .unwrap_or(rest)
                    .to_string()
            })
            .collect()
    }
}

impl Completion for ClusterComplete {
    // dialoguer replaces the whole line with one string, so complete by the
    // longest common prefix of the matching remainders. A unique match
    // yields the full stem.
    fn get(&self, input: &str) -> Option<String> {
        let suffixes = self.suffixes(input);
        let common = common_prefix(&suffixes)?;
        if common.is_empty() {
            return None;
        }
        Some(format!("{input}{common}"))
    }
}

fn common_prefix(items: &[String]) -> Option<&str> {
    let (first, rest) = items.split_first()?;
    let mut prefix = first.as_str();
    for item in rest {
        while !item.starts_with(prefix) {
            match prefix.char_indices().last() {
                Some((idx, _)) => prefix = &prefix[..idx],
                None => return Some(""),
            }
        }
    }
    Some(prefix)
}

/// Read one line of input, offering tab completion from `completion`.
pub fn prompt_selection(prompt: &str, completion: &ClusterComplete) -> anyhow::Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .completion_with(completion)
        .interact_text()
        .context("Reading cluster selection")?;

    Ok(input)
}

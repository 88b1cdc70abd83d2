use serde_json::Value;
use std::path::{Path, PathBuf};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Artifacts go next to the dataset unless a directory is given.
pub fn resolve_output_dir(data: &Path, output_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = output_dir {
        return dir.to_path_buf();
    }
    match data.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `ui_ux_functionality` -> `Ui Ux Functionality`
pub fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_query_id(query_id: &Value) -> String {
    match query_id {
        Value::String(id) => id.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Unique scratch path under the system temp dir.
#[cfg(test)]
pub fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "retrolist-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

use anyhow::{Context, Result, ensure};
use retrolist_eval::{EvaluatorSet, Record, read_records};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::common::split_csv;

/// Load the JSONL dataset at `path`.
///
/// # Errors
///
/// Fails when the file is missing or any non-blank line is not a JSON record.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    ensure!(path.is_file(), "File not found - {}", path.display());
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let records = read_records(BufReader::new(file))
        .with_context(|| format!("invalid JSONL in {}", path.display()))?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Resolve the `--evaluators` list into an evaluator set.
///
/// # Errors
///
/// Fails on unknown names or an empty list.
pub fn select_evaluators(list: &str) -> Result<EvaluatorSet> {
    let names = split_csv(list);
    EvaluatorSet::select(&names).with_context(|| format!("invalid --evaluators value '{list}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::temp_path;
    use std::fs;

    fn temp_file(label: &str, content: &str) -> std::path::PathBuf {
        let path = temp_path(&format!("loader-{label}"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_reported_by_path() {
        let path = temp_path("loader-absent");
        let err = load_dataset(&path).unwrap_err();
        assert!(format!("{err:#}").contains("File not found"));
    }

    #[test]
    fn loads_records_and_skips_blank_lines() {
        let path = temp_file(
            "ok",
            "{\"query_type\":\"search\",\"response\":{}}\n\n{\"query_type\":\"filter\"}\n",
        );
        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn malformed_line_names_the_file_and_line() {
        let path = temp_file("bad", "{\"query_type\":\"search\"}\n{oops\n");
        let message = format!("{:#}", load_dataset(&path).unwrap_err());
        assert!(message.contains("invalid JSONL"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn evaluator_list_is_validated() {
        assert_eq!(select_evaluators("all").unwrap().len(), 3);
        assert_eq!(select_evaluators("data_integrity, ui_ux_functionality").unwrap().len(), 2);
        assert!(select_evaluators("speed").is_err());
        assert!(select_evaluators(" , ").is_err());
    }
}

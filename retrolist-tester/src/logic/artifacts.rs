use anyhow::{Context, Result};
use retrolist_eval::constants::{RESULTS_FILE_NAME, SUMMARY_FILE_NAME};
use retrolist_eval::{ScoredRecord, Summary};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub results: PathBuf,
    pub summary: PathBuf,
}

/// Write the detailed results and the summary as pretty JSON into `dir`.
///
/// # Errors
///
/// Fails if the directory or either file cannot be written.
pub fn write_artifacts(
    dir: &Path,
    results: &[ScoredRecord],
    summary: &Summary,
) -> Result<ArtifactPaths> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let paths = ArtifactPaths {
        results: dir.join(RESULTS_FILE_NAME),
        summary: dir.join(SUMMARY_FILE_NAME),
    };
    write_pretty_json(&paths.results, results)?;
    write_pretty_json(&paths.summary, summary)?;
    Ok(paths)
}

fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

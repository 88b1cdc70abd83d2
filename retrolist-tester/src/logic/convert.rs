//! Turns a captured `responses.json` into the JSONL dataset format.

use anyhow::{Context, Result, ensure};
use retrolist_eval::{QueryType, Record, SuccessFlag, write_records};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// One entry of a response capture.
#[derive(Debug, Clone, Deserialize)]
pub struct CapturedResponse {
    #[serde(default)]
    pub query_id: Value,
    #[serde(default)]
    pub query_type: QueryType,
    #[serde(default)]
    pub query_description: String,
    #[serde(default)]
    pub response: Value,
    #[serde(default, deserialize_with = "truthy")]
    pub passed: bool,
}

/// Captures come from a JavaScript runner, so `passed` follows its truthiness:
/// null, false, 0 and "" are false, everything else true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

impl CapturedResponse {
    /// The response is stored JSON-encoded, the way datasets carry it.
    ///
    /// # Errors
    ///
    /// Fails only if the response value cannot be encoded.
    pub fn into_record(self) -> Result<Record> {
        let encoded = serde_json::to_string(&self.response)
            .with_context(|| format!("failed to encode response for {}", self.query_id))?;
        Ok(Record {
            query_id: self.query_id,
            query_type: self.query_type,
            query: self.query_description,
            ground_truth: if self.passed { "success" } else { "failure" }.to_string(),
            response: Value::String(encoded),
            success: SuccessFlag::from_bool(self.passed),
        })
    }
}

/// Convert the capture at `capture` and write it as JSONL to `destination`,
/// creating parent directories. Returns the number of records written.
///
/// # Errors
///
/// Fails when the capture is missing, is not a JSON array of entries, or the
/// destination cannot be written.
pub fn convert_capture(capture: &Path, destination: &Path) -> Result<usize> {
    ensure!(capture.is_file(), "File not found - {}", capture.display());
    let raw = fs::read_to_string(capture)
        .with_context(|| format!("failed to read {}", capture.display()))?;
    let entries: Vec<CapturedResponse> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a response capture", capture.display()))?;

    let records = entries
        .into_iter()
        .map(CapturedResponse::into_record)
        .collect::<Result<Vec<_>>>()?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = File::create(destination)
        .with_context(|| format!("failed to create {}", destination.display()))?;
    write_records(BufWriter::new(file), &records)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    log::info!(
        "converted {} captured responses into {}",
        records.len(),
        destination.display()
    );
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::temp_path;
    use serde_json::json;

    #[test]
    fn capture_entry_becomes_dataset_record() {
        let entry: CapturedResponse = serde_json::from_value(json!({
            "query_id": "SC-2",
            "query_type": "sharecode",
            "query_description": "Import a friend's share code",
            "response": {"action": "import_sharecode", "games_imported": 4},
            "timestamp": "2025-03-01T10:00:00Z",
            "passed": true
        }))
        .unwrap();
        let record = entry.into_record().unwrap();
        assert_eq!(record.query_type, QueryType::ShareCode);
        assert_eq!(record.query, "Import a friend's share code");
        assert_eq!(record.ground_truth, "success");
        assert_eq!(record.success, SuccessFlag::Yes);
        let Value::String(encoded) = &record.response else {
            panic!("response should be JSON-encoded");
        };
        let decoded: Value = serde_json::from_str(encoded).unwrap();
        assert_eq!(decoded["games_imported"], json!(4));
    }

    #[test]
    fn failed_capture_maps_to_failure() {
        let entry: CapturedResponse =
            serde_json::from_value(json!({"query_type": "export", "passed": false})).unwrap();
        let record = entry.into_record().unwrap();
        assert_eq!(record.ground_truth, "failure");
        assert_eq!(record.success, SuccessFlag::No);
        assert_eq!(record.response, json!("null"));
    }

    #[test]
    fn passed_follows_truthiness() {
        let passed = |raw: Value| -> bool {
            serde_json::from_value::<CapturedResponse>(json!({"passed": raw}))
                .unwrap()
                .passed
        };
        assert!(!passed(Value::Null));
        assert!(!passed(json!(0)));
        assert!(!passed(json!("")));
        assert!(passed(json!(1)));
        assert!(passed(json!("yes")));
        assert!(passed(json!({})));
    }

    #[test]
    fn converts_capture_file_to_jsonl() {
        let dir = temp_path("convert");
        let capture = dir.join("responses.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            &capture,
            json!([
                {"query_id": 1, "query_type": "search", "query_description": "zelda",
                 "response": {"success": true, "results_count": 1, "results": [{}]}, "passed": true},
                {"query_id": 2, "query_type": "edge_case", "query_description": "empty",
                 "response": {"success": false}, "passed": false}
            ])
            .to_string(),
        )
        .unwrap();
        let destination = dir.join("nested").join("evaluation_data.jsonl");
        assert_eq!(convert_capture(&capture, &destination).unwrap(), 2);
        let written = fs::read_to_string(destination).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(written.contains("\"ground_truth\":\"failure\""));
    }

    #[test]
    fn rejects_non_array_capture() {
        let path = temp_path("convert-object");
        fs::write(&path, "{\"query_id\": 1}").unwrap();
        let destination = temp_path("convert-unused");
        assert!(convert_capture(&path, &destination).is_err());
    }
}

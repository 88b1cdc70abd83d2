//! Fixed scoring and reporting constants.
//!
//! These values are part of the comparison contract with earlier evaluation
//! baselines, so they only change through reviewed code edits.

// Scoring -------------------------------------------------------------------
/// A score at or above this value counts as a pass.
pub const PASS_THRESHOLD: f64 = 0.7;
/// Decimal places kept for averages, minima and maxima.
pub const SCORE_DECIMALS: u32 = 3;

// Reasons -------------------------------------------------------------------
pub(crate) const REASON_INVALID_RESPONSE: &str = "Invalid response format";
pub(crate) const REASON_EVALUATION_ERROR_PREFIX: &str = "Evaluation error: ";

// Query types ---------------------------------------------------------------
pub(crate) const UNKNOWN_QUERY_TYPE: &str = "unknown";

// Share code actions --------------------------------------------------------
pub(crate) const ACTION_PERSIST: &str = "persist";
pub(crate) const ACTION_GENERATE_SHARECODE: &str = "generate_sharecode";
pub(crate) const ACTION_IMPORT_SHARECODE: &str = "import_sharecode";

// Artifacts -----------------------------------------------------------------
/// File name of the detailed per-record results.
pub const RESULTS_FILE_NAME: &str = "evaluation_results.json";
/// File name of the aggregated summary.
pub const SUMMARY_FILE_NAME: &str = "evaluation_summary.json";
/// Default JSONL dataset file name.
pub const DATASET_FILE_NAME: &str = "evaluation_data.jsonl";

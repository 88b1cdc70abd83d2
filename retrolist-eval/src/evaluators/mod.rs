//! Scoring rules, one evaluator per quality dimension.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use thiserror::Error;

use crate::constants::{REASON_EVALUATION_ERROR_PREFIX, REASON_INVALID_RESPONSE};
use crate::record::{QueryType, Record, SuccessFlag};
use crate::response::{InteractionResponse, ResponseError};
use crate::score::{EvaluationResult, Score};
use crate::scored::ScoredRecord;

pub mod data_integrity;
pub mod search_filter;
pub mod ui_ux;

pub use data_integrity::DataIntegrityEvaluator;
pub use search_filter::SearchFilterAccuracyEvaluator;
pub use ui_ux::UiUxFunctionalityEvaluator;

/// Quality dimension an evaluator scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SearchFilterAccuracy,
    DataIntegrity,
    UiUxFunctionality,
}

impl Metric {
    /// Aggregation order.
    pub const ALL: [Self; 3] = [
        Self::SearchFilterAccuracy,
        Self::DataIntegrity,
        Self::UiUxFunctionality,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SearchFilterAccuracy => "search_filter_accuracy",
            Self::DataIntegrity => "data_integrity",
            Self::UiUxFunctionality => "ui_ux_functionality",
        }
    }

    /// Key the score is stored under in detailed results.
    #[must_use]
    pub const fn score_key(self) -> &'static str {
        match self {
            Self::SearchFilterAccuracy => "search_filter_accuracy_score",
            Self::DataIntegrity => "data_integrity_score",
            Self::UiUxFunctionality => "ui_ux_functionality_score",
        }
    }

    /// Key the reason is stored under in detailed results.
    #[must_use]
    pub const fn reason_key(self) -> &'static str {
        match self {
            Self::SearchFilterAccuracy => "accuracy_reason",
            Self::DataIntegrity => "integrity_reason",
            Self::UiUxFunctionality => "functionality_reason",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SearchFilterAccuracy => "Search and filter queries return matching games",
            Self::DataIntegrity => "Collection, export and share code data survive intact",
            Self::UiUxFunctionality => "UI interactions and edge cases behave gracefully",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error("{0}")]
    Rule(String),
}

/// A pure scoring rule set for one quality dimension.
pub trait Evaluator {
    fn metric(&self) -> Metric;

    /// Query types this evaluator has rules for; everything else scores a
    /// silent zero.
    fn recognized_types(&self) -> &'static [QueryType];

    /// Score an already decoded response.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule cannot be applied to the response.
    fn score(
        &self,
        response: &InteractionResponse,
        success: SuccessFlag,
    ) -> Result<EvaluationResult, EvaluationError>;

    fn name(&self) -> &'static str {
        self.metric().name()
    }

    /// Decode `response` for `query_type` and score it.
    ///
    /// Malformed or wrong-shape payloads score zero with an invalid-format
    /// reason instead of failing.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Evaluator::score`].
    fn evaluate(
        &self,
        query_type: &QueryType,
        response: &Value,
        success: SuccessFlag,
    ) -> Result<EvaluationResult, EvaluationError> {
        match InteractionResponse::decode(query_type, response) {
            Ok(decoded) => self.score(&decoded, success),
            Err(err) => {
                log::debug!("{} rejected {query_type} response: {err}", self.name());
                Ok(EvaluationResult::new(Score::Zero, REASON_INVALID_RESPONSE))
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluatorSelectionError {
    #[error("unknown evaluator '{0}' (available: search_filter_accuracy, data_integrity, ui_ux_functionality)")]
    Unknown(String),
    #[error("no evaluators selected")]
    Empty,
}

/// Ordered collection of evaluators applied to every record.
pub struct EvaluatorSet {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl fmt::Debug for EvaluatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.evaluators.iter().map(|evaluator| evaluator.name()))
            .finish()
    }
}

impl Default for EvaluatorSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EvaluatorSet {
    /// All three built-in evaluators in aggregation order.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_metrics(&Metric::ALL)
    }

    fn from_metrics(metrics: &[Metric]) -> Self {
        let evaluators = metrics
            .iter()
            .map(|metric| -> Box<dyn Evaluator> {
                match metric {
                    Metric::SearchFilterAccuracy => Box::new(SearchFilterAccuracyEvaluator),
                    Metric::DataIntegrity => Box::new(DataIntegrityEvaluator),
                    Metric::UiUxFunctionality => Box::new(UiUxFunctionalityEvaluator),
                }
            })
            .collect();
        Self { evaluators }
    }

    /// Build a set from evaluator names. `all` expands to every built-in;
    /// duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names or when nothing is selected.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self, EvaluatorSelectionError> {
        let mut metrics: Vec<Metric> = Vec::new();
        for name in names {
            let name = name.as_ref();
            if name.eq_ignore_ascii_case("all") {
                metrics.extend(Metric::ALL);
                continue;
            }
            let metric = Metric::from_name(name)
                .ok_or_else(|| EvaluatorSelectionError::Unknown(name.to_string()))?;
            metrics.push(metric);
        }

        let mut deduped: Vec<Metric> = Vec::with_capacity(metrics.len());
        for metric in metrics {
            if !deduped.contains(&metric) {
                deduped.push(metric);
            }
        }

        if deduped.is_empty() {
            return Err(EvaluatorSelectionError::Empty);
        }
        Ok(Self::from_metrics(&deduped))
    }

    /// Add an evaluator, replacing any existing one for the same metric.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        let metric = evaluator.metric();
        if let Some(slot) = self
            .evaluators
            .iter_mut()
            .find(|existing| existing.metric() == metric)
        {
            *slot = evaluator;
        } else {
            self.evaluators.push(evaluator);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Evaluator> {
        self.evaluators.iter().map(|evaluator| &**evaluator)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Apply every evaluator to `record`. Never fails: evaluator errors
    /// become a zero score whose reason carries the error.
    #[must_use]
    pub fn score_record(&self, record: &Record) -> ScoredRecord {
        let results: SmallVec<[(Metric, EvaluationResult); 3]> = self
            .iter()
            .map(|evaluator| (evaluator.metric(), evaluate_guarded(evaluator, record)))
            .collect();
        ScoredRecord::from_record(record, results)
    }

    #[must_use]
    pub fn score_all(&self, records: &[Record]) -> Vec<ScoredRecord> {
        records
            .iter()
            .map(|record| self.score_record(record))
            .collect()
    }
}

fn evaluate_guarded(evaluator: &dyn Evaluator, record: &Record) -> EvaluationResult {
    match evaluator.evaluate(&record.query_type, &record.response, record.success) {
        Ok(result) => result,
        Err(err) => {
            log::warn!(
                "Error in {} for record {}: {err}",
                evaluator.name(),
                record.query_id
            );
            EvaluationResult::new(
                Score::Zero,
                format!("{REASON_EVALUATION_ERROR_PREFIX}{err}"),
            )
        }
    }
}

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use smallvec::SmallVec;

use crate::evaluators::Metric;
use crate::numbers::mean;
use crate::record::{QueryType, Record};
use crate::score::EvaluationResult;

/// A record's identifying fields plus every evaluator result it received.
///
/// Serializes flat: the identifying fields followed by each metric's score
/// and reason under that metric's keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub query_id: Value,
    pub query_type: QueryType,
    pub query: String,
    pub ground_truth: String,
    pub results: SmallVec<[(Metric, EvaluationResult); 3]>,
}

impl ScoredRecord {
    #[must_use]
    pub fn from_record(
        record: &Record,
        results: SmallVec<[(Metric, EvaluationResult); 3]>,
    ) -> Self {
        Self {
            query_id: record.query_id.clone(),
            query_type: record.query_type.clone(),
            query: record.query.clone(),
            ground_truth: record.ground_truth.clone(),
            results,
        }
    }

    #[must_use]
    pub fn result(&self, metric: Metric) -> Option<&EvaluationResult> {
        self.results
            .iter()
            .find(|(candidate, _)| *candidate == metric)
            .map(|(_, result)| result)
    }

    #[must_use]
    pub fn score(&self, metric: Metric) -> Option<f64> {
        self.result(metric).map(|result| result.score.value())
    }

    /// Mean over the metrics this record carries, in aggregation order.
    #[must_use]
    pub fn mean_score(&self) -> Option<f64> {
        let scores: SmallVec<[f64; 3]> = Metric::ALL
            .into_iter()
            .filter_map(|metric| self.score(metric))
            .collect();
        mean(&scores)
    }
}

impl Serialize for ScoredRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4 + self.results.len() * 2))?;
        map.serialize_entry("query_id", &self.query_id)?;
        map.serialize_entry("query_type", &self.query_type)?;
        map.serialize_entry("query", &self.query)?;
        map.serialize_entry("ground_truth", &self.ground_truth)?;
        for (metric, result) in &self.results {
            map.serialize_entry(metric.score_key(), &result.score)?;
            map.serialize_entry(metric.reason_key(), &result.reason)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Score;
    use serde_json::json;
    use smallvec::smallvec;

    fn scored() -> ScoredRecord {
        let record = Record::new("export", json!({}))
            .with_query_id("Q9")
            .with_query("export owned games");
        ScoredRecord::from_record(
            &record,
            smallvec![
                (
                    Metric::UiUxFunctionality,
                    EvaluationResult::new(Score::Full, "Export functionality: working")
                ),
                (
                    Metric::DataIntegrity,
                    EvaluationResult::new(Score::Half, "CSV format valid but no games exported")
                ),
            ],
        )
    }

    #[test]
    fn serializes_flat_with_metric_keys() {
        let value = serde_json::to_value(scored()).unwrap();
        assert_eq!(value["query_id"], json!("Q9"));
        assert_eq!(value["query_type"], json!("export"));
        assert_eq!(value["ui_ux_functionality_score"], json!(1.0));
        assert_eq!(value["integrity_reason"], json!("CSV format valid but no games exported"));
        assert!(value.get("search_filter_accuracy_score").is_none());
    }

    #[test]
    fn mean_covers_only_present_metrics() {
        let record = scored();
        assert_eq!(record.mean_score(), Some(0.75));
        assert_eq!(record.score(Metric::SearchFilterAccuracy), None);
    }

    #[test]
    fn record_without_results_has_no_mean() {
        let record = ScoredRecord::from_record(&Record::new("search", json!({})), SmallVec::new());
        assert_eq!(record.mean_score(), None);
    }
}

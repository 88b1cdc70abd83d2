//! Aggregation of scored records into summary statistics.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::clock::{Clock, format_timestamp};
use crate::constants::{PASS_THRESHOLD, SCORE_DECIMALS};
use crate::evaluators::Metric;
use crate::numbers::{mean, percentage, round_to_places, usize_to_f64};
use crate::scored::ScoredRecord;

/// Statistics for one metric across every record that carries it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStats {
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: String,
}

impl MetricStats {
    /// `None` for an empty slice.
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let spread = ScoreSpread::from_scores(scores)?;
        Some(Self {
            average_score: spread.average,
            min_score: spread.min,
            max_score: spread.max,
            total_tests: scores.len(),
            passed: spread.passed,
            failed: scores.len() - spread.passed,
            pass_rate: spread.pass_rate,
        })
    }
}

/// The same arithmetic as [`MetricStats`] over every individual score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub total_metric_evaluations: usize,
    pub overall_pass_rate: String,
}

impl OverallStats {
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let spread = ScoreSpread::from_scores(scores)?;
        Some(Self {
            average_score: spread.average,
            min_score: spread.min,
            max_score: spread.max,
            total_metric_evaluations: scores.len(),
            overall_pass_rate: spread.pass_rate,
        })
    }
}

struct ScoreSpread {
    average: f64,
    min: f64,
    max: f64,
    passed: usize,
    pass_rate: String,
}

impl ScoreSpread {
    fn from_scores(scores: &[f64]) -> Option<Self> {
        let average = mean(scores)?;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let passed = scores.iter().filter(|&&score| score >= PASS_THRESHOLD).count();
        Some(Self {
            average: round_to_places(average, SCORE_DECIMALS),
            min: round_to_places(min, SCORE_DECIMALS),
            max: round_to_places(max, SCORE_DECIMALS),
            passed,
            pass_rate: format_pass_rate(passed, scores.len()),
        })
    }
}

/// Percentage with one decimal and a `%` suffix.
#[must_use]
pub fn format_pass_rate(passed: usize, total: usize) -> String {
    format!("{:.1}%", percentage(passed, total))
}

/// Running average for one query type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct QueryTypeStats {
    pub count: usize,
    pub avg_score: f64,
}

impl QueryTypeStats {
    /// Fold one record's mean into the running average. The average is
    /// rounded after every step, so the result depends on record order.
    pub fn record(&mut self, record_mean: f64) {
        self.count += 1;
        let n = usize_to_f64(self.count);
        let updated = (self.avg_score * (n - 1.0) + record_mean) / n;
        self.avg_score = round_to_places(updated, SCORE_DECIMALS);
    }
}

/// Per-query-type statistics in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryTypeBreakdown {
    entries: Vec<(String, QueryTypeStats)>,
}

impl QueryTypeBreakdown {
    fn entry_mut(&mut self, query_type: &str) -> &mut QueryTypeStats {
        let index = match self.entries.iter().position(|(name, _)| name == query_type) {
            Some(index) => index,
            None => {
                self.entries
                    .push((query_type.to_string(), QueryTypeStats::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    #[must_use]
    pub fn get(&self, query_type: &str) -> Option<&QueryTypeStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == query_type)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryTypeStats)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for QueryTypeBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stats) in &self.entries {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Aggregate over every evaluation result of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_evaluations: usize,
    pub timestamp: String,
    pub metrics: BTreeMap<Metric, MetricStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallStats>,
    pub by_query_type: QueryTypeBreakdown,
}

impl Summary {
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<&MetricStats> {
        self.metrics.get(&metric)
    }
}

/// Aggregate `results` in order. Pure apart from the timestamp taken from
/// `clock`.
#[must_use]
pub fn summarize(results: &[ScoredRecord], clock: &dyn Clock) -> Summary {
    let mut metrics = BTreeMap::new();
    let mut all_scores: Vec<f64> = Vec::new();

    for metric in Metric::ALL {
        let scores: Vec<f64> = results
            .iter()
            .filter_map(|record| record.score(metric))
            .collect();
        if let Some(stats) = MetricStats::from_scores(&scores) {
            metrics.insert(metric, stats);
        }
        all_scores.extend(scores);
    }

    let mut by_query_type = QueryTypeBreakdown::default();
    for record in results {
        let stats = by_query_type.entry_mut(record.query_type.as_str());
        if let Some(record_mean) = record.mean_score() {
            stats.record(record_mean);
        }
    }

    Summary {
        total_evaluations: results.len(),
        timestamp: format_timestamp(clock.now()),
        metrics,
        overall: OverallStats::from_scores(&all_scores),
        by_query_type,
    }
}

use colored::Colorize;
use retrolist_eval::{EvaluatorSet, Record, ScoredRecord};

use crate::common::display_query_id;

/// Score every record in order, printing one progress line per record.
/// With `verbose`, each metric's score and reason follow.
pub fn run_evaluations(
    evaluators: &EvaluatorSet,
    records: &[Record],
    verbose: bool,
) -> Vec<ScoredRecord> {
    println!("{}", "🔍 Running Evaluations".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let total = records.len();
    let mut results = Vec::with_capacity(total);
    for (index, record) in records.iter().enumerate() {
        println!(
            "  Evaluating test {}/{}: {}",
            index + 1,
            total,
            display_query_id(&record.query_id)
        );
        let scored = evaluators.score_record(record);
        if verbose {
            print_record_detail(&scored);
        }
        results.push(scored);
    }
    results
}

fn print_record_detail(scored: &ScoredRecord) {
    for (metric, result) in &scored.results {
        let status = if result.score.passes() {
            "✅".green()
        } else {
            "❌".red()
        };
        let reason = if result.reason.is_empty() {
            "not applicable".dimmed().to_string()
        } else {
            result.reason.clone()
        };
        println!(
            "     {status} {metric}: {:.1} - {reason}",
            result.score.value()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrolist_eval::Metric;
    use serde_json::json;

    #[test]
    fn keeps_record_order_and_all_metrics() {
        let records = vec![
            Record::new("search", json!({"success": true, "results_count": 1, "results": [1]}))
                .with_query_id("S1"),
            Record::new("edge_case", json!("{not json")).with_query_id("E1"),
        ];
        let results = run_evaluations(&EvaluatorSet::builtin(), &records, true);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].query_id, json!("S1"));
        assert_eq!(results[0].score(Metric::SearchFilterAccuracy), Some(1.0));
        assert_eq!(results[1].score(Metric::UiUxFunctionality), Some(0.0));
    }

    #[test]
    fn empty_dataset_yields_no_results() {
        assert!(run_evaluations(&EvaluatorSet::builtin(), &[], false).is_empty());
    }
}

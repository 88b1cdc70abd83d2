//! Search and filter accuracy.
//!
//! A query counts as accurate when it succeeded and actually returned games.
//! A successful query with no hits is only partially credited.

use crate::record::{QueryType, SuccessFlag};
use crate::response::{InteractionResponse, ResultsResponse};
use crate::score::{EvaluationResult, Score};

use super::{EvaluationError, Evaluator, Metric};

const RECOGNIZED: &[QueryType] = &[QueryType::Search, QueryType::Filter];

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilterAccuracyEvaluator;

impl Evaluator for SearchFilterAccuracyEvaluator {
    fn metric(&self) -> Metric {
        Metric::SearchFilterAccuracy
    }

    fn recognized_types(&self) -> &'static [QueryType] {
        RECOGNIZED
    }

    fn score(
        &self,
        response: &InteractionResponse,
        _success: SuccessFlag,
    ) -> Result<EvaluationResult, EvaluationError> {
        let result = match response {
            InteractionResponse::Search(results) | InteractionResponse::Filter(results) => {
                score_results(results)
            }
            _ => EvaluationResult::silent(),
        };
        Ok(result)
    }
}

fn score_results(results: &ResultsResponse) -> EvaluationResult {
    if results.success && results.results_count > 0 && !results.results.is_empty() {
        EvaluationResult::new(
            Score::Full,
            format!(
                "Search/filter successful with {} results returned",
                results.results_count
            ),
        )
    } else if results.success && results.results_count == 0 {
        EvaluationResult::new(
            Score::Half,
            "Query executed successfully but returned no results",
        )
    } else {
        EvaluationResult::new(Score::Zero, "Query execution failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn evaluate(query_type: &str, response: &Value) -> EvaluationResult {
        SearchFilterAccuracyEvaluator
            .evaluate(&QueryType::from(query_type), response, SuccessFlag::Yes)
            .unwrap()
    }

    #[test]
    fn successful_search_with_results_scores_full() {
        let result = evaluate(
            "search",
            &json!({"success": true, "results_count": 3, "results": [1, 2, 3]}),
        );
        assert_eq!(result.score, Score::Full);
        assert_eq!(
            result.reason,
            "Search/filter successful with 3 results returned"
        );
    }

    #[test]
    fn successful_search_without_results_scores_half() {
        let result = evaluate(
            "search",
            &json!({"success": true, "results_count": 0, "results": []}),
        );
        assert_eq!(result.score, Score::Half);
    }

    #[test]
    fn count_without_result_rows_is_a_failure() {
        let result = evaluate(
            "filter",
            &json!({"success": true, "results_count": 4, "results": []}),
        );
        assert_eq!(result.score, Score::Zero);
        assert_eq!(result.reason, "Query execution failed");
    }

    #[test]
    fn failed_filter_scores_zero_even_with_empty_count() {
        let result = evaluate("filter", &json!({"success": false, "results_count": 0}));
        assert_eq!(result.score, Score::Zero);
    }

    #[test]
    fn advisory_flag_does_not_override_response() {
        let result = SearchFilterAccuracyEvaluator
            .evaluate(
                &QueryType::Search,
                &json!({"success": false}),
                SuccessFlag::Yes,
            )
            .unwrap();
        assert_eq!(result.score, Score::Zero);
    }

    #[test]
    fn other_query_types_are_silent() {
        let result = evaluate("export", &json!({"success": true, "csv_valid": true}));
        assert_eq!(result, EvaluationResult::silent());
    }

    #[test]
    fn encoded_payload_is_decoded() {
        let result = evaluate(
            "search",
            &json!(r#"{"success": true, "results_count": 1, "results": [{"Game Name": "Contra"}]}"#),
        );
        assert_eq!(result.score, Score::Full);
    }
}

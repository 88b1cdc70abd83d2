//! UI/UX functionality.
//!
//! Missing success is treated as "needs verification" rather than a failure,
//! so every recognized interaction scores at least half credit.

use crate::record::{QueryType, SuccessFlag};
use crate::response::InteractionResponse;
use crate::score::{EvaluationResult, Score};

use super::{EvaluationError, Evaluator, Metric};

const RECOGNIZED: &[QueryType] = &[
    QueryType::UiInteraction,
    QueryType::Export,
    QueryType::ShareCode,
    QueryType::EdgeCase,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct UiUxFunctionalityEvaluator;

impl Evaluator for UiUxFunctionalityEvaluator {
    fn metric(&self) -> Metric {
        Metric::UiUxFunctionality
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
            InteractionResponse::UiInteraction(status) => EvaluationResult::new(
                Score::full_or_half(status.success),
                format!(
                    "UI interaction '{}': {}",
                    status.action,
                    if status.success {
                        "operational"
                    } else {
                        "needs verification"
                    }
                ),
            ),
            InteractionResponse::Export(export) => EvaluationResult::new(
                Score::full_or_half(export.csv_valid),
                format!(
                    "Export functionality: {}",
                    if export.csv_valid { "working" } else { "partial" }
                ),
            ),
            InteractionResponse::ShareCode(share) => EvaluationResult::new(
                Score::full_or_half(share.success),
                format!(
                    "Share code UI ({}): {}",
                    share.action,
                    if share.success {
                        "functional"
                    } else {
                        "needs attention"
                    }
                ),
            ),
            InteractionResponse::EdgeCase(status) => EvaluationResult::new(
                Score::full_or_half(status.success),
                format!(
                    "Edge case handling: {}",
                    if status.success {
                        "graceful"
                    } else {
                        "needs improvement"
                    }
                ),
            ),
            _ => EvaluationResult::silent(),
        };
        Ok(result)
    }
}

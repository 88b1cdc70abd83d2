//! Data integrity of collection management, CSV export and share codes.

use crate::constants::{ACTION_GENERATE_SHARECODE, ACTION_IMPORT_SHARECODE, ACTION_PERSIST};
use crate::record::{QueryType, SuccessFlag};
use crate::response::{
    CollectionResponse, ExportResponse, InteractionResponse, ShareCodeResponse,
};
use crate::score::{EvaluationResult, Score};

use super::{EvaluationError, Evaluator, Metric};

const RECOGNIZED: &[QueryType] = &[
    QueryType::Collection,
    QueryType::Export,
    QueryType::ShareCode,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DataIntegrityEvaluator;

impl Evaluator for DataIntegrityEvaluator {
    fn metric(&self) -> Metric {
        Metric::DataIntegrity
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
            InteractionResponse::Collection(collection) => score_collection(collection),
            InteractionResponse::Export(export) => score_export(export),
            InteractionResponse::ShareCode(share) => score_share_code(share),
            _ => EvaluationResult::silent(),
        };
        Ok(result)
    }
}

fn score_collection(collection: &CollectionResponse) -> EvaluationResult {
    if collection.action == ACTION_PERSIST {
        let supported = collection.persistence_supported;
        return EvaluationResult::new(
            Score::full_or_half(supported),
            format!(
                "Collection persistence {}",
                if supported { "supported" } else { "not verified" }
            ),
        );
    }

    if let Some(games) = &collection.games {
        let all_succeeded = games.iter().all(|game| game.success);
        return EvaluationResult::new(
            Score::full_or_half(all_succeeded),
            format!(
                "Batch collection operation: {}",
                if all_succeeded {
                    "all succeeded"
                } else {
                    "partial success"
                }
            ),
        );
    }

    EvaluationResult::new(
        Score::full_or_zero(collection.success),
        format!(
            "Collection {} operation: {}",
            collection.action,
            if collection.success {
                "succeeded"
            } else {
                "failed"
            }
        ),
    )
}

fn score_export(export: &ExportResponse) -> EvaluationResult {
    if export.csv_valid && export.games_count > 0 {
        EvaluationResult::new(
            Score::Full,
            format!("CSV export valid with {} games", export.games_count),
        )
    } else if export.csv_valid {
        EvaluationResult::new(Score::Half, "CSV format valid but no games exported")
    } else {
        EvaluationResult::new(Score::Zero, "CSV export failed or invalid format")
    }
}

fn score_share_code(share: &ShareCodeResponse) -> EvaluationResult {
    match share.action.as_str() {
        ACTION_GENERATE_SHARECODE => EvaluationResult::new(
            Score::full_or_half(share.share_code_valid && share.games_count > 0),
            format!(
                "Share code generation: {}",
                if share.share_code_valid {
                    "valid"
                } else {
                    "invalid"
                }
            ),
        ),
        ACTION_IMPORT_SHARECODE => EvaluationResult::new(
            Score::full_or_zero(share.games_imported > 0),
            format!("Share code import: {} games imported", share.games_imported),
        ),
        _ => EvaluationResult::silent(),
    }
}

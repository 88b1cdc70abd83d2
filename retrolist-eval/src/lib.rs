//! Retro Game List evaluation core
//!
//! Scores logged behaviour of the Retro Game List application along three
//! quality dimensions and aggregates the results. Everything here is pure
//! apart from the summary timestamp; file handling and reporting live in the
//! tester binary.

pub mod clock;
pub mod constants;
pub mod dataset;
pub mod evaluators;
pub mod numbers;
pub mod record;
pub mod response;
pub mod score;
pub mod scored;
pub mod summary;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use dataset::{DatasetError, read_records, write_records};
pub use evaluators::{
    DataIntegrityEvaluator, EvaluationError, Evaluator, EvaluatorSelectionError, EvaluatorSet,
    Metric, SearchFilterAccuracyEvaluator, UiUxFunctionalityEvaluator,
};
pub use record::{QueryType, Record, SuccessFlag};
pub use response::{InteractionResponse, ResponseError};
pub use score::{EvaluationResult, Score};
pub use scored::ScoredRecord;
pub use summary::{
    MetricStats, OverallStats, QueryTypeBreakdown, QueryTypeStats, Summary, format_pass_rate,
    summarize,
};

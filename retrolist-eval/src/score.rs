use serde::{Serialize, Serializer};

use crate::constants::PASS_THRESHOLD;

/// Discrete quality value an evaluator assigns to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Score {
    #[default]
    Zero,
    Half,
    Full,
}

impl Score {
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Half => 0.5,
            Self::Full => 1.0,
        }
    }

    #[must_use]
    pub const fn full_or_half(condition: bool) -> Self {
        if condition { Self::Full } else { Self::Half }
    }

    #[must_use]
    pub const fn full_or_zero(condition: bool) -> Self {
        if condition { Self::Full } else { Self::Zero }
    }

    #[must_use]
    pub fn passes(self) -> bool {
        self.value() >= PASS_THRESHOLD
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

/// Output of one evaluator applied to one record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EvaluationResult {
    pub score: Score,
    pub reason: String,
}

impl EvaluationResult {
    #[must_use]
    pub fn new(score: Score, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }

    /// Result for a query type the evaluator has no rule for.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Whether an evaluator rule actually fired.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !self.reason.is_empty()
    }
}

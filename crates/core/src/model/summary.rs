use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{MODULE_COUNT, ModuleIndex};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("graded count ({graded}) exceeds module count ({total})")]
    CountMismatch { graded: usize, total: usize },
}

/// Aggregate result of a completed walkthrough pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    correct: usize,
    incorrect: usize,
    total_modules: usize,
}

impl WalkthroughSummary {
    /// Builds a summary from explicit counts.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, and `SummaryError::CountMismatch` if more grades were
    /// counted than modules exist.
    pub fn from_parts(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        correct: usize,
        incorrect: usize,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let graded = correct + incorrect;
        if graded > MODULE_COUNT {
            return Err(SummaryError::CountMismatch {
                graded,
                total: MODULE_COUNT,
            });
        }

        Ok(Self {
            started_at,
            completed_at,
            correct,
            incorrect,
            total_modules: MODULE_COUNT,
        })
    }

    /// Builds a summary from the recorded score map.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`.
    pub fn from_scores(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        scores: &BTreeMap<ModuleIndex, bool>,
    ) -> Result<Self, SummaryError> {
        let correct = scores.values().filter(|is_correct| **is_correct).count();
        let incorrect = scores.len() - correct;
        Self::from_parts(started_at, completed_at, correct, incorrect)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.total_modules
    }

    /// Wall-clock time the pass took.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}

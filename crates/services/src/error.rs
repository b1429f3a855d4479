//! Shared error types for the services crate.

use thiserror::Error;

use quest_core::model::{InvalidModuleIndex, QuizError, SummaryError};

/// Errors emitted while loading the course catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("course catalog is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("course catalog has {got} modules, expected {expected}")]
    WrongModuleCount { got: usize, expected: usize },

    #[error("module {index}: {source}")]
    InvalidQuiz {
        index: usize,
        #[source]
        source: QuizError,
    },

    #[error(transparent)]
    ModuleIndex(#[from] InvalidModuleIndex),
}

/// Errors emitted by `WalkthroughService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WalkthroughError {
    #[error("walkthrough has not reached the results screen")]
    NotComplete,

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

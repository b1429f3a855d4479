use thiserror::Error;

use crate::model::{QuizError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

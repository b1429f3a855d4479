use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("a quiz needs at least two options, got {0}")]
    NotEnoughOptions(usize),

    #[error("correct option {index} out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

/// A single multiple-choice question with its static answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDefinition {
    question: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl QuizDefinition {
    /// Builds a quiz, validating the answer key against the option list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestion` for blank question text,
    /// `QuizError::NotEnoughOptions` for fewer than two options, and
    /// `QuizError::CorrectOptionOutOfRange` if the key does not point at an
    /// option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(QuizError::NotEnoughOptions(options.len()));
        }
        if correct_option >= options.len() {
            return Err(QuizError::CorrectOptionOutOfRange {
                index: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            question,
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Grades a selection by equality with the answer key.
    #[must_use]
    pub fn grade(&self, selected: usize) -> bool {
        selected == self.correct_option
    }
}

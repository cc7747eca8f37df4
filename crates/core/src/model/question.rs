use serde::Deserialize;
use thiserror::Error;

/// Every question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question data, as authored or deserialized from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_index: usize,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
        }
    }

    /// Validate the draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError` when the text is blank, the option
    /// count is not exactly [`OPTION_COUNT`], an option is blank, or the
    /// correct index is out of range.
    pub fn validate(self) -> Result<Question, QuestionValidationError> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return Err(QuestionValidationError::EmptyText);
        }

        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionValidationError::EmptyOption { index });
        }

        let len = self.options.len();
        let options: [String; OPTION_COUNT] = self
            .options
            .try_into()
            .map_err(|_| QuestionValidationError::WrongOptionCount { len })?;

        if self.correct_index >= OPTION_COUNT {
            return Err(QuestionValidationError::CorrectIndexOutOfRange {
                index: self.correct_index,
            });
        }

        Ok(Question {
            text,
            options,
            correct_index: self.correct_index,
        })
    }
}

/// A validated multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Whether the given selection is the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionValidationError {
    #[error("question text is blank")]
    EmptyText,

    #[error("expected {OPTION_COUNT} options, got {len}")]
    WrongOptionCount { len: usize },

    #[error("option {index} is blank")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range")]
    CorrectIndexOutOfRange { index: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

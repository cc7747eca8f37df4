mod answer;
mod catalog;
mod question;
mod summary;

pub use answer::AnswerRecord;
pub use catalog::{Catalog, CatalogError};
pub use question::{Question, QuestionDraft, QuestionValidationError, OPTION_COUNT};
pub use summary::{QuizSummary, SummaryError};

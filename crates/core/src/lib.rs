#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod time;

pub use model::{
    AnswerRecord, Catalog, CatalogError, Question, QuestionDraft, QuestionValidationError,
    QuizSummary, SummaryError, OPTION_COUNT,
};
pub use session::{
    Phase, QuizSession, Resolution, SessionError, SessionEvent, AUTO_ADVANCE_SECONDS,
    QUESTION_SECONDS,
};
pub use time::Clock;

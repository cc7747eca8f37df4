#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_loop;
pub mod sound;

pub use quiz_core::{Clock, SessionError};

pub use error::QuizLoopError;
pub use quiz_loop::{AdvanceOutcome, AnswerOutcome, QuizLoopService, TickOutcome};
pub use sound::{NullSoundPlayer, RecordingSoundPlayer, SoundCue, SoundPlayer};

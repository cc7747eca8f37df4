use std::sync::Arc;

use quiz_core::{Catalog, QuizSession, QuizSummary, SessionEvent};

use crate::error::QuizLoopError;
use crate::sound::{NullSoundPlayer, SoundPlayer};
use crate::Clock;

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub events: Vec<SessionEvent>,
}

/// Result of delivering one countdown second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub timed_out: bool,
    pub advanced: bool,
    pub finished: bool,
    pub events: Vec<SessionEvent>,
}

/// Result of manually advancing past a resolved question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub finished: bool,
    pub events: Vec<SessionEvent>,
}

/// Orchestrates one quiz attempt: drives the session state machine, owns the
/// time source, and maps resolutions to sound cues.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    sounds: Arc<dyn SoundPlayer>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, sounds: Arc<dyn SoundPlayer>) -> Self {
        Self { clock, sounds }
    }

    /// A loop service without sound playback.
    #[must_use]
    pub fn silent(clock: Clock) -> Self {
        Self::new(clock, Arc::new(NullSoundPlayer))
    }

    /// Start a new attempt over the given catalog, on its first question.
    #[must_use]
    pub fn start_session(&self, catalog: Catalog) -> QuizSession {
        let mut session = QuizSession::new(catalog);
        session.start(self.clock.now());
        session
    }

    /// Answer the current question and play the matching cue.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` for out-of-range selections and for
    /// stale clicks on an already-resolved question; the session is untouched
    /// and no cue plays.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        selected: usize,
    ) -> Result<AnswerOutcome, QuizLoopError> {
        let events = session.answer(selected)?;

        let correct_index = resolved_correct_index(&events).unwrap_or(selected);
        let is_correct = selected == correct_index;
        if is_correct {
            self.sounds.play_correct();
        } else {
            self.sounds.play_wrong();
        }

        Ok(AnswerOutcome {
            selected,
            correct_index,
            is_correct,
            events,
        })
    }

    /// Deliver one countdown second; plays the timeout cue when this tick
    /// expires the question. Stale ticks produce an empty outcome.
    pub fn tick(&self, session: &mut QuizSession) -> TickOutcome {
        let events = session.tick(self.clock.now());

        let timed_out = events
            .iter()
            .any(|event| matches!(event, SessionEvent::Resolved { selected: None, .. }));
        if timed_out {
            self.sounds.play_timeout();
        }

        TickOutcome {
            timed_out,
            advanced: events
                .iter()
                .any(|event| matches!(event, SessionEvent::QuestionReady { .. })),
            finished: events
                .iter()
                .any(|event| matches!(event, SessionEvent::Finished { .. })),
            events,
        }
    }

    /// Move past a resolved question.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` when the current question has not
    /// been resolved yet.
    pub fn advance_current(
        &self,
        session: &mut QuizSession,
    ) -> Result<AdvanceOutcome, QuizLoopError> {
        let events = session.advance(self.clock.now())?;

        Ok(AdvanceOutcome {
            finished: events
                .iter()
                .any(|event| matches!(event, SessionEvent::Finished { .. })),
            events,
        })
    }

    /// Summary of a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` before the attempt is complete.
    pub fn summary(&self, session: &QuizSession) -> Result<QuizSummary, QuizLoopError> {
        Ok(session.summary()?)
    }
}

fn resolved_correct_index(events: &[SessionEvent]) -> Option<usize> {
    events.iter().find_map(|event| match event {
        SessionEvent::Resolved { correct_index, .. } => Some(*correct_index),
        _ => None,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

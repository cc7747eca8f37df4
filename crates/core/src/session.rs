use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerRecord, Catalog, Question, QuizSummary, SummaryError, OPTION_COUNT};

/// Countdown length for each question, in seconds.
pub const QUESTION_SECONDS: u32 = 15;

/// Delay before a timed-out question advances on its own, in seconds.
pub const AUTO_ADVANCE_SECONDS: u32 = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors for session operations. None of these mutate the session: callers
/// that forward stale UI events can drop them safely.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("selected option {index} is out of range")]
    OptionOutOfRange { index: usize },

    #[error("no question is in progress")]
    NotInProgress,

    #[error("current question is not resolved")]
    NotResolved,

    #[error("session is not finished")]
    NotFinished,

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

//
// ─── STATES & EVENTS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    Resolved,
    Finished,
}

/// How the current question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Answered { selected: usize },
    TimedOut,
}

/// Presentation-facing events produced by session operations, so any
/// rendering technology can subscribe without reaching into session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    QuestionReady {
        index: usize,
        total: usize,
        remaining_seconds: u32,
    },
    Tick {
        remaining_seconds: u32,
    },
    Resolved {
        correct_index: usize,
        selected: Option<usize>,
    },
    Finished {
        score: u32,
        total: u32,
    },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt over a fixed catalog.
///
/// Steps through the catalog question by question. Each question is resolved
/// exactly once, by the first of an answer or a countdown timeout; the loser
/// of that race is ignored. `Finished` is terminal until `start` resets the
/// whole machine.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Catalog,
    phase: Phase,
    current: usize,
    score: u32,
    answers: Vec<AnswerRecord>,
    remaining_seconds: u32,
    resolution: Option<Resolution>,
    auto_advance: Option<u32>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            phase: Phase::Idle,
            current: 0,
            score: 0,
            answers: Vec::new(),
            remaining_seconds: 0,
            resolution: None,
            auto_advance: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// Start (or restart) the attempt from the first question.
    ///
    /// Always succeeds: the catalog is static and non-empty. Any pending
    /// countdown or auto-advance from a previous attempt is cancelled.
    pub fn start(&mut self, now: DateTime<Utc>) -> Vec<SessionEvent> {
        self.phase = Phase::InProgress;
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.remaining_seconds = QUESTION_SECONDS;
        self.resolution = None;
        self.auto_advance = None;
        self.started_at = Some(now);
        self.completed_at = None;

        vec![SessionEvent::QuestionReady {
            index: 0,
            total: self.catalog.len(),
            remaining_seconds: self.remaining_seconds,
        }]
    }

    /// Resolve the current question with the user's selection.
    ///
    /// The first resolution wins: once a question is answered or timed out,
    /// further answers are rejected without touching the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` when no question is awaiting an
    /// answer (stale click), or `SessionError::OptionOutOfRange` for a
    /// selection outside the option range. Neither mutates the session.
    pub fn answer(&mut self, selected: usize) -> Result<Vec<SessionEvent>, SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if selected >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange { index: selected });
        }

        Ok(vec![self.resolve(Some(selected))])
    }

    /// Deliver one countdown second.
    ///
    /// While a question is in progress this decrements the countdown and, at
    /// zero, resolves the question as timed out and arms the auto-advance
    /// delay. While a timed-out question is showing, it counts the delay down
    /// and then advances. Every other tick is a stale timer event and is
    /// ignored, so a late tick can never resolve an already-resolved question
    /// or leak into a later question's countdown.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<SessionEvent> {
        match self.phase {
            Phase::InProgress => {
                self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
                if self.remaining_seconds > 0 {
                    vec![SessionEvent::Tick {
                        remaining_seconds: self.remaining_seconds,
                    }]
                } else {
                    let resolved = self.resolve(None);
                    self.auto_advance = Some(AUTO_ADVANCE_SECONDS);
                    vec![
                        SessionEvent::Tick {
                            remaining_seconds: 0,
                        },
                        resolved,
                    ]
                }
            }
            Phase::Resolved => match self.auto_advance {
                Some(left) if left <= 1 => {
                    self.auto_advance = None;
                    self.advance_inner(now)
                }
                Some(left) => {
                    self.auto_advance = Some(left - 1);
                    Vec::new()
                }
                None => Vec::new(),
            },
            Phase::Idle | Phase::Finished => Vec::new(),
        }
    }

    /// Move past a resolved question: next question, or finish the attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotResolved` unless the current question has
    /// been answered or timed out.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Vec<SessionEvent>, SessionError> {
        if self.phase != Phase::Resolved {
            return Err(SessionError::NotResolved);
        }
        self.auto_advance = None;
        Ok(self.advance_inner(now))
    }

    /// All answer records, in catalog order, for the post-quiz review.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the attempt is complete.
    pub fn review(&self) -> Result<&[AnswerRecord], SessionError> {
        if self.phase != Phase::Finished {
            return Err(SessionError::NotFinished);
        }
        Ok(&self.answers)
    }

    /// Aggregate summary of a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the attempt is complete.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        let (Phase::Finished, Some(started_at), Some(completed_at)) =
            (self.phase, self.started_at, self.completed_at)
        else {
            return Err(SessionError::NotFinished);
        };
        Ok(QuizSummary::from_records(
            started_at,
            completed_at,
            &self.answers,
        )?)
    }

    fn resolve(&mut self, selected: Option<usize>) -> SessionEvent {
        // Callers guarantee phase == InProgress and a current question.
        let question = self.catalog.questions()[self.current].clone();
        let correct_index = question.correct_index();
        let record = AnswerRecord::new(question, selected);
        if record.is_correct() {
            self.score += 1;
        }
        self.answers.push(record);
        self.resolution = selected
            .map(|selected| Resolution::Answered { selected })
            .or(Some(Resolution::TimedOut));
        self.phase = Phase::Resolved;

        SessionEvent::Resolved {
            correct_index,
            selected,
        }
    }

    fn advance_inner(&mut self, now: DateTime<Utc>) -> Vec<SessionEvent> {
        self.current += 1;
        self.resolution = None;
        self.auto_advance = None;

        if self.current < self.catalog.len() {
            self.phase = Phase::InProgress;
            self.remaining_seconds = QUESTION_SECONDS;
            vec![SessionEvent::QuestionReady {
                index: self.current,
                total: self.catalog.len(),
                remaining_seconds: self.remaining_seconds,
            }]
        } else {
            self.phase = Phase::Finished;
            self.completed_at = Some(now);
            vec![SessionEvent::Finished {
                score: self.score,
                total: self.total_questions() as u32,
            }]
        }
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The question currently on screen, if the attempt is underway.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress | Phase::Resolved => self.catalog.get(self.current),
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// How the current question resolved, while it is showing its outcome.
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether a timeout auto-advance is pending, i.e. ticks must keep
    /// flowing even though the question is resolved.
    #[must_use]
    pub fn auto_advance_pending(&self) -> bool {
        self.auto_advance.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;
    use crate::time::fixed_now;

    fn small_catalog() -> Catalog {
        Catalog::from_drafts(vec![
            QuestionDraft::new("Q1", ["a", "b", "c", "d"], 2),
            QuestionDraft::new("Q2", ["a", "b", "c", "d"], 1),
            QuestionDraft::new("Q3", ["a", "b", "c", "d"], 0),
        ])
        .unwrap()
    }

    fn started(catalog: Catalog) -> QuizSession {
        let mut session = QuizSession::new(catalog);
        session.start(fixed_now());
        session
    }

    fn score_matches_records(session: &QuizSession) -> bool {
        let correct = session
            .answers()
            .iter()
            .filter(|record| record.is_correct())
            .count();
        session.score() as usize == correct
    }

    #[test]
    fn start_emits_first_question() {
        let mut session = QuizSession::new(small_catalog());
        assert_eq!(session.phase(), Phase::Idle);

        let events = session.start(fixed_now());

        assert_eq!(
            events,
            vec![SessionEvent::QuestionReady {
                index: 0,
                total: 3,
                remaining_seconds: QUESTION_SECONDS,
            }]
        );
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.current_question().unwrap().text(), "Q1");
    }

    #[test]
    fn correct_answer_scores_and_resolves() {
        let mut session = started(small_catalog());

        let events = session.answer(2).unwrap();

        assert_eq!(
            events,
            vec![SessionEvent::Resolved {
                correct_index: 2,
                selected: Some(2),
            }]
        );
        assert_eq!(session.phase(), Phase::Resolved);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answers().len(), 1);
        assert!(session.answers()[0].is_correct());
        assert_eq!(
            session.resolution(),
            Some(Resolution::Answered { selected: 2 })
        );
        assert!(score_matches_records(&session));
    }

    #[test]
    fn wrong_answer_resolves_without_scoring() {
        let mut session = started(small_catalog());

        let events = session.answer(0).unwrap();

        assert_eq!(
            events,
            vec![SessionEvent::Resolved {
                correct_index: 2,
                selected: Some(0),
            }]
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.answers().len(), 1);
        assert!(score_matches_records(&session));
    }

    #[test]
    fn out_of_range_answer_changes_nothing() {
        let mut session = started(small_catalog());

        let err = session.answer(5).unwrap_err();

        assert_eq!(err, SessionError::OptionOutOfRange { index: 5 });
        assert_eq!(session.phase(), Phase::InProgress);
        assert!(session.answers().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn second_answer_is_rejected_and_records_once() {
        let mut session = started(small_catalog());

        session.answer(2).unwrap();
        let err = session.answer(0).unwrap_err();

        assert_eq!(err, SessionError::NotInProgress);
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn countdown_ticks_down_each_second() {
        let mut session = started(small_catalog());

        let events = session.tick(fixed_now());

        assert_eq!(
            events,
            vec![SessionEvent::Tick {
                remaining_seconds: QUESTION_SECONDS - 1,
            }]
        );
        assert_eq!(session.remaining_seconds(), QUESTION_SECONDS - 1);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn countdown_expiry_times_the_question_out() {
        let mut session = started(small_catalog());

        let mut last = Vec::new();
        for _ in 0..QUESTION_SECONDS {
            last = session.tick(fixed_now());
        }

        assert_eq!(
            last,
            vec![
                SessionEvent::Tick {
                    remaining_seconds: 0,
                },
                SessionEvent::Resolved {
                    correct_index: 2,
                    selected: None,
                },
            ]
        );
        assert_eq!(session.phase(), Phase::Resolved);
        assert_eq!(session.resolution(), Some(Resolution::TimedOut));
        assert_eq!(session.score(), 0);
        assert!(session.answers()[0].timed_out());
        assert!(session.auto_advance_pending());
    }

    #[test]
    fn timeout_auto_advances_after_the_delay() {
        let mut session = started(small_catalog());
        for _ in 0..QUESTION_SECONDS {
            session.tick(fixed_now());
        }

        // First delay second: still showing the timed-out question.
        assert!(session.tick(fixed_now()).is_empty());
        assert_eq!(session.phase(), Phase::Resolved);

        // Second delay second: advances to the next question.
        let events = session.tick(fixed_now());
        assert_eq!(
            events,
            vec![SessionEvent::QuestionReady {
                index: 1,
                total: 3,
                remaining_seconds: QUESTION_SECONDS,
            }]
        );
        assert_eq!(session.phase(), Phase::InProgress);
        assert!(!session.auto_advance_pending());
    }

    #[test]
    fn answer_after_timeout_keeps_the_timeout_record() {
        let mut session = started(small_catalog());
        for _ in 0..QUESTION_SECONDS {
            session.tick(fixed_now());
        }

        let err = session.answer(2).unwrap_err();

        assert_eq!(err, SessionError::NotInProgress);
        assert_eq!(session.answers().len(), 1);
        assert!(session.answers()[0].timed_out());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn tick_after_answer_is_a_stale_event() {
        let mut session = started(small_catalog());
        session.answer(2).unwrap();
        let remaining = session.remaining_seconds();

        let events = session.tick(fixed_now());

        assert!(events.is_empty());
        assert_eq!(session.phase(), Phase::Resolved);
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.remaining_seconds(), remaining);
    }

    #[test]
    fn tick_before_start_is_ignored() {
        let mut session = QuizSession::new(small_catalog());
        assert!(session.tick(fixed_now()).is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn advance_requires_a_resolution() {
        let mut session = started(small_catalog());

        let err = session.advance(fixed_now()).unwrap_err();

        assert_eq!(err, SessionError::NotResolved);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_moves_to_the_next_question_with_a_fresh_countdown() {
        let mut session = started(small_catalog());
        session.answer(2).unwrap();
        session.tick(fixed_now()); // stale; countdown must not leak

        let events = session.advance(fixed_now()).unwrap();

        assert_eq!(
            events,
            vec![SessionEvent::QuestionReady {
                index: 1,
                total: 3,
                remaining_seconds: QUESTION_SECONDS,
            }]
        );
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.remaining_seconds(), QUESTION_SECONDS);
    }

    #[test]
    fn one_record_per_question_in_catalog_order() {
        let mut session = started(small_catalog());

        for expected in 1..=3 {
            session.answer(0).unwrap();
            assert_eq!(session.answered_count(), expected);
            session.advance(fixed_now()).unwrap();
        }

        let review = session.review().unwrap();
        assert_eq!(review.len(), 3);
        assert_eq!(review[0].question().text(), "Q1");
        assert_eq!(review[1].question().text(), "Q2");
        assert_eq!(review[2].question().text(), "Q3");
    }

    #[test]
    fn finishing_freezes_the_session() {
        let mut session = started(small_catalog());
        session.answer(2).unwrap();
        session.advance(fixed_now()).unwrap();
        session.answer(1).unwrap();
        session.advance(fixed_now()).unwrap();
        session.answer(0).unwrap();

        let events = session.advance(fixed_now()).unwrap();

        assert_eq!(events, vec![SessionEvent::Finished { score: 3, total: 3 }]);
        assert!(session.is_finished());
        assert_eq!(session.current_question(), None);

        // Terminal until restarted.
        assert_eq!(session.answer(0).unwrap_err(), SessionError::NotInProgress);
        assert_eq!(
            session.advance(fixed_now()).unwrap_err(),
            SessionError::NotResolved
        );
        assert!(session.tick(fixed_now()).is_empty());
        assert_eq!(session.score(), 3);
        assert_eq!(session.answers().len(), 3);
    }

    #[test]
    fn review_is_unavailable_before_finish() {
        let mut session = started(small_catalog());
        session.answer(2).unwrap();

        assert_eq!(session.review().unwrap_err(), SessionError::NotFinished);
        assert_eq!(session.summary().unwrap_err(), SessionError::NotFinished);
    }

    #[test]
    fn summary_reflects_the_finished_attempt() {
        let started_at = fixed_now();
        let completed_at = started_at + chrono::Duration::seconds(50);
        let mut session = QuizSession::new(small_catalog());
        session.start(started_at);

        session.answer(2).unwrap();
        session.advance(started_at).unwrap();
        session.answer(0).unwrap();
        session.advance(started_at).unwrap();
        for _ in 0..QUESTION_SECONDS {
            session.tick(started_at);
        }
        session.advance(completed_at).unwrap();

        let summary = session.summary().unwrap();
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.score(), 1);
        assert_eq!(summary.wrong(), 1);
        assert_eq!(summary.timed_out(), 1);
        assert_eq!(summary.started_at(), started_at);
        assert_eq!(summary.completed_at(), completed_at);
        assert_eq!(summary.elapsed_seconds(), 50);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = started(small_catalog());
        session.answer(2).unwrap();
        session.advance(fixed_now()).unwrap();
        for _ in 0..QUESTION_SECONDS {
            session.tick(fixed_now());
        }
        assert!(session.auto_advance_pending());

        let events = session.start(fixed_now());

        assert_eq!(
            events,
            vec![SessionEvent::QuestionReady {
                index: 0,
                total: 3,
                remaining_seconds: QUESTION_SECONDS,
            }]
        );
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.auto_advance_pending());
        assert_eq!(session.remaining_seconds(), QUESTION_SECONDS);
    }

    //
    // ─── BUILTIN CATALOG SCENARIOS ─────────────────────────────────────────
    //

    #[test]
    fn scenario_first_question_answered_correctly() {
        let mut session = started(Catalog::builtin());

        let events = session.answer(2).unwrap();

        assert_eq!(
            events,
            vec![SessionEvent::Resolved {
                correct_index: 2,
                selected: Some(2),
            }]
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.answers()[0].selected(), Some(2));
    }

    #[test]
    fn scenario_second_question_times_out() {
        let mut session = started(Catalog::builtin());
        session.answer(2).unwrap();
        session.advance(fixed_now()).unwrap();

        for _ in 0..QUESTION_SECONDS {
            session.tick(fixed_now());
        }

        let record = &session.answers()[1];
        assert_eq!(record.selected(), None);
        assert_eq!(record.question().correct_index(), 1);
        assert_eq!(session.score(), 1);

        // Auto-advance lands on question 3.
        session.tick(fixed_now());
        session.tick(fixed_now());
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn scenario_perfect_run_scores_twenty() {
        let catalog = Catalog::builtin();
        let mut session = started(catalog.clone());

        let mut last = Vec::new();
        for question in catalog.questions() {
            session.answer(question.correct_index()).unwrap();
            last = session.advance(fixed_now()).unwrap();
        }

        assert_eq!(
            last,
            vec![SessionEvent::Finished {
                score: 20,
                total: 20,
            }]
        );
        assert_eq!(session.review().unwrap().len(), 20);
    }

    #[test]
    fn scenario_fifth_question_answered_wrong() {
        let mut session = started(Catalog::builtin());
        for _ in 0..4 {
            session.answer(0).unwrap();
            session.advance(fixed_now()).unwrap();
        }
        let before = session.score();

        // Question 5: boiling point, correct index 1.
        let events = session.answer(0).unwrap();

        assert_eq!(
            events,
            vec![SessionEvent::Resolved {
                correct_index: 1,
                selected: Some(0),
            }]
        );
        assert_eq!(session.score(), before);
    }
}

use quiz_core::{Catalog, Phase, QuizSession, Resolution};
use services::QuizLoopService;

/// User/timer input the quiz view forwards to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer(usize),
    Tick,
    Advance,
    Restart,
}

/// How an option button should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Selectable, no outcome shown yet.
    Idle,
    /// Highlighted as the correct option.
    Correct,
    /// Highlighted as the user's wrong selection.
    Wrong,
    /// Disabled without highlight (timed out, or not involved in the outcome).
    Muted,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "option-btn",
            OptionState::Correct => "option-btn option-btn--correct",
            OptionState::Wrong => "option-btn option-btn--wrong",
            OptionState::Muted => "option-btn option-btn--muted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOptionVm {
    pub label: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewEntryVm {
    pub number: usize,
    pub text: String,
    pub options: Vec<ReviewOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score_line: String,
    pub detail_line: String,
}

/// Presentation state for one quiz attempt.
///
/// Owns the session and keeps every label/highlight decision out of the rsx
/// tree so it stays testable without a webview.
pub struct QuizVm {
    session: QuizSession,
    catalog: Catalog,
}

impl QuizVm {
    #[must_use]
    pub fn start(service: &QuizLoopService, catalog: Catalog) -> Self {
        let session = service.start_session(catalog.clone());
        Self { session, catalog }
    }

    /// Apply an intent. Stale events and out-of-range selections are dropped,
    /// mirroring the session's no-op guarantees.
    pub fn dispatch(&mut self, service: &QuizLoopService, intent: QuizIntent) {
        match intent {
            QuizIntent::Answer(selected) => {
                let _ = service.answer_current(&mut self.session, selected);
            }
            QuizIntent::Tick => {
                service.tick(&mut self.session);
            }
            QuizIntent::Advance => {
                let _ = service.advance_current(&mut self.session);
            }
            QuizIntent::Restart => {
                self.session = service.start_session(self.catalog.clone());
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.session.phase() == Phase::InProgress
    }

    /// Whether the current question resolved by running out of time.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.session.resolution() == Some(Resolution::TimedOut)
    }

    /// Whether the Next button applies: resolved, and not about to advance on
    /// its own.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.session.phase() == Phase::Resolved && !self.session.auto_advance_pending()
    }

    /// Whether the 1 Hz tick source must keep running.
    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.in_progress() || self.session.auto_advance_pending()
    }

    #[must_use]
    pub fn question_label(&self) -> Option<String> {
        self.session
            .current_question()
            .map(|question| format!("Q{}. {}", self.session.current_index() + 1, question.text()))
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let shown = (self.session.current_index() + 1).min(self.session.total_questions());
        format!("{shown} / {}", self.session.total_questions())
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format!("Time: {}s", self.session.remaining_seconds())
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionVm> {
        let Some(question) = self.session.current_question() else {
            return Vec::new();
        };

        let resolution = self.session.resolution();
        question
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let state = match resolution {
                    None => OptionState::Idle,
                    Some(Resolution::Answered { selected }) => {
                        outcome_state(index, question.correct_index(), Some(selected))
                    }
                    // A timeout shows no highlight at all.
                    Some(Resolution::TimedOut) => OptionState::Muted,
                };
                OptionVm {
                    label: label.clone(),
                    state,
                    enabled: resolution.is_none(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultVm> {
        let summary = self.session.summary().ok()?;
        Some(ResultVm {
            score_line: format!("{} / {}", summary.score(), summary.total()),
            detail_line: format!(
                "{} correct, {} wrong, {} timed out ({}s)",
                summary.correct(),
                summary.wrong(),
                summary.timed_out(),
                summary.elapsed_seconds()
            ),
        })
    }

    #[must_use]
    pub fn review_entries(&self) -> Vec<ReviewEntryVm> {
        let Ok(records) = self.session.review() else {
            return Vec::new();
        };

        records
            .iter()
            .enumerate()
            .map(|(number, record)| ReviewEntryVm {
                number: number + 1,
                text: record.question().text().to_string(),
                options: record
                    .question()
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(index, label)| ReviewOptionVm {
                        label: label.clone(),
                        state: match record.selected() {
                            None => OptionState::Muted,
                            Some(selected) => {
                                outcome_state(index, record.question().correct_index(), Some(selected))
                            }
                        },
                    })
                    .collect(),
            })
            .collect()
    }
}

fn outcome_state(index: usize, correct_index: usize, selected: Option<usize>) -> OptionState {
    if index == correct_index {
        OptionState::Correct
    } else if selected == Some(index) {
        OptionState::Wrong
    } else {
        OptionState::Muted
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::answer::AnswerRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many answers for a single session: {len}")]
    TooManyAnswers { len: usize },
}

/// Aggregate outcome of a finished quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total: u32,
    correct: u32,
    wrong: u32,
    timed_out: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from the session's answer records.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, or `SummaryError::TooManyAnswers` if the record count
    /// cannot fit in `u32`.
    pub fn from_records(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }

        let total = u32::try_from(records.len()).map_err(|_| SummaryError::TooManyAnswers {
            len: records.len(),
        })?;

        let mut correct = 0_u32;
        let mut wrong = 0_u32;
        let mut timed_out = 0_u32;
        for record in records {
            if record.timed_out() {
                timed_out = timed_out.saturating_add(1);
            } else if record.is_correct() {
                correct = correct.saturating_add(1);
            } else {
                wrong = wrong.saturating_add(1);
            }
        }

        Ok(Self {
            total,
            correct,
            wrong,
            timed_out,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The score is the number of correctly answered questions.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn timed_out(&self) -> u32 {
        self.timed_out
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Wall-clock duration of the attempt, in whole seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> i64 {
        (self.completed_at - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;
    use crate::time::fixed_now;

    fn record(selected: Option<usize>) -> AnswerRecord {
        let question = QuestionDraft::new("Q", ["a", "b", "c", "d"], 2)
            .validate()
            .unwrap();
        AnswerRecord::new(question, selected)
    }

    #[test]
    fn summary_counts_outcomes() {
        let now = fixed_now();
        let records = vec![
            record(Some(2)),
            record(Some(0)),
            record(None),
            record(Some(2)),
        ];

        let summary =
            QuizSummary::from_records(now, now + chrono::Duration::seconds(40), &records).unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.score(), 2);
        assert_eq!(summary.wrong(), 1);
        assert_eq!(summary.timed_out(), 1);
        assert_eq!(summary.elapsed_seconds(), 40);
    }

    #[test]
    fn completed_before_started_is_rejected() {
        let now = fixed_now();
        let err = QuizSummary::from_records(now, now - chrono::Duration::seconds(1), &[])
            .unwrap_err();

        assert_eq!(err, SummaryError::InvalidTimeRange);
    }
}

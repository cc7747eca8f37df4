use crate::model::question::Question;

/// The recorded outcome of a single question.
///
/// Created exactly once per question, in catalog order. `selected` is `None`
/// when the countdown expired before the user picked an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    question: Question,
    selected: Option<usize>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question: Question, selected: Option<usize>) -> Self {
        Self { question, selected }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected
            .is_some_and(|selected| self.question.is_correct(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn question() -> Question {
        QuestionDraft::new("Q", ["a", "b", "c", "d"], 1)
            .validate()
            .unwrap()
    }

    #[test]
    fn correct_selection_is_correct() {
        let record = AnswerRecord::new(question(), Some(1));
        assert!(record.is_correct());
        assert!(!record.timed_out());
    }

    #[test]
    fn wrong_selection_is_not_correct() {
        let record = AnswerRecord::new(question(), Some(0));
        assert!(!record.is_correct());
    }

    #[test]
    fn timeout_is_neither_correct_nor_selected() {
        let record = AnswerRecord::new(question(), None);
        assert!(record.timed_out());
        assert!(!record.is_correct());
        assert_eq!(record.selected(), None);
    }
}

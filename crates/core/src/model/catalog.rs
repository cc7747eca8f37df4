use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionValidationError, OPTION_COUNT};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no questions")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        source: QuestionValidationError,
    },
}

/// The fixed, ordered list of questions a session runs through.
///
/// A catalog is never empty, so a session always has a first question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { questions })
    }

    /// Validate a sequence of drafts into a catalog, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Question` for the first invalid draft, or
    /// `CatalogError::Empty` when there are none.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = QuestionDraft>,
    ) -> Result<Self, CatalogError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// The built-in general-knowledge catalog (20 questions).
    ///
    /// # Panics
    ///
    /// Panics if the baked-in question data is invalid, which would be a bug
    /// caught by tests.
    #[must_use]
    pub fn builtin() -> Self {
        let drafts = BUILTIN
            .iter()
            .map(|(text, options, correct)| QuestionDraft::new(*text, *options, *correct));
        Self::from_drafts(drafts).expect("builtin catalog is valid")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

type BuiltinEntry = (&'static str, [&'static str; OPTION_COUNT], usize);

const BUILTIN: &[BuiltinEntry] = &[
    (
        "What is the capital of France?",
        ["Berlin", "London", "Paris", "Madrid"],
        2,
    ),
    (
        "Which planet is known as the Red Planet?",
        ["Earth", "Mars", "Jupiter", "Venus"],
        1,
    ),
    (
        "Who wrote 'Romeo and Juliet'?",
        [
            "Charles Dickens",
            "William Shakespeare",
            "Mark Twain",
            "Jane Austen",
        ],
        1,
    ),
    ("What is 9 × 9?", ["81", "72", "99", "90"], 0),
    (
        "What is the boiling point of water at sea level?",
        ["90°C", "100°C", "110°C", "120°C"],
        1,
    ),
    (
        "Which gas do plants absorb from the atmosphere?",
        ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
        2,
    ),
    (
        "What is the largest mammal in the world?",
        ["Elephant", "Blue Whale", "Giraffe", "Great White Shark"],
        1,
    ),
    (
        "Which language is primarily used for Android app development?",
        ["Swift", "Kotlin", "Ruby", "Python"],
        1,
    ),
    (
        "Who painted the Mona Lisa?",
        [
            "Vincent van Gogh",
            "Pablo Picasso",
            "Leonardo da Vinci",
            "Claude Monet",
        ],
        2,
    ),
    (
        "What does HTTP stand for?",
        [
            "HyperText Transfer Protocol",
            "HighText Transfer Protocol",
            "HyperText Translate Protocol",
            "HyperText Transfer Program",
        ],
        0,
    ),
    (
        "What is the largest continent by area?",
        ["Africa", "Asia", "Europe", "Antarctica"],
        1,
    ),
    (
        "Who discovered penicillin?",
        [
            "Alexander Fleming",
            "Marie Curie",
            "Isaac Newton",
            "Louis Pasteur",
        ],
        0,
    ),
    (
        "What is the chemical symbol for gold?",
        ["Au", "Ag", "Fe", "Gd"],
        0,
    ),
    (
        "Which country hosted the 2016 Summer Olympics?",
        ["China", "Brazil", "UK", "Russia"],
        1,
    ),
    ("What is the formula for water?", ["H2O", "CO2", "O2", "HO"], 0),
    (
        "Who is known as the Father of Computers?",
        ["Alan Turing", "Charles Babbage", "Bill Gates", "Steve Jobs"],
        1,
    ),
    (
        "What is the hardest natural substance on Earth?",
        ["Gold", "Iron", "Diamond", "Platinum"],
        2,
    ),
    (
        "In which year did World War II end?",
        ["1945", "1939", "1918", "1955"],
        0,
    ),
    (
        "Which organ in the human body pumps blood?",
        ["Lungs", "Kidney", "Heart", "Brain"],
        2,
    ),
    (
        "Which planet is closest to the Sun?",
        ["Venus", "Earth", "Mercury", "Mars"],
        2,
    ),
];

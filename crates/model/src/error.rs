use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Question type is not one of `true-false`, `multiple-choice`, or `multiple-answer`.
    InvalidQuestionType,
    /// A correct answer refers to a choice that does not exist.
    OutOfRangeChoiceIndex,
    /// True-or-false questions must have exactly two choices.
    TrueFalseChoiceCount,
    /// Single-answer questions need a single index; multiple-answer questions need a set.
    MismatchedCorrectSpec,
    /// A multiple-answer question with no correct choices can never be answered.
    EmptyCorrectSet,
    /// The same index was listed twice in a set of correct answers.
    DuplicateCorrectIndex,
    /// A quiz must have at least one question.
    EmptyQuiz,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidQuestionType => "Unrecognized question type.",
            Self::OutOfRangeChoiceIndex => "Correct answer refers to a nonexistent choice.",
            Self::TrueFalseChoiceCount => "True-or-false questions must have exactly two choices.",
            Self::MismatchedCorrectSpec => "Correct answer does not match the question type.",
            Self::EmptyCorrectSet => "Multiple-answer questions need at least one correct choice.",
            Self::DuplicateCorrectIndex => "Duplicate index in the correct answers.",
            Self::EmptyQuiz => "Quiz has no questions.",
        })
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

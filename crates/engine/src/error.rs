use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The answer log does not have exactly one entry per question.
    AnswerLogLengthMismatch { expected: usize, found: usize },
    /// A choice index past the end of the question's choices.
    OutOfRangeChoiceIndex { index: usize, count: usize },
    /// Attempted to submit a question without picking anything.
    EmptySelection,
    /// More than one choice picked for a question that takes a single answer.
    TooManyChoices { count: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AnswerLogLengthMismatch { expected, found } => {
                write!(f, "Expected {expected} answers but found {found}.")
            }
            Self::OutOfRangeChoiceIndex { index, count } => {
                write!(f, "Choice {index} does not exist; the question has {count} choices.")
            }
            Self::EmptySelection => f.write_str("Pick at least one choice before moving on."),
            Self::TooManyChoices { count } => write!(f, "Only one choice may be picked, but {count} were."),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

use crate::error::{Error, Result};
use alloc::{boxed::Box, collections::BTreeSet, string::String, vec::Vec};
use core::str::FromStr;
use serde::{Deserialize, Serialize, Serializer};

/// Determines how many choices may be selected at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Exactly two choices, one of which is correct.
    TrueFalse,
    /// One correct choice among several.
    MultipleChoice,
    /// Any non-empty subset of the choices.
    MultipleAnswer,
}

impl QuestionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrueFalse => "true-false",
            Self::MultipleChoice => "multiple-choice",
            Self::MultipleAnswer => "multiple-answer",
        }
    }

    /// Whether picking a choice replaces the previous one.
    pub const fn is_single_select(self) -> bool {
        !matches!(self, Self::MultipleAnswer)
    }
}

impl FromStr for QuestionKind {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(match text {
            "true-false" => Self::TrueFalse,
            "multiple-choice" => Self::MultipleChoice,
            "multiple-answer" => Self::MultipleAnswer,
            _ => return Err(Error::InvalidQuestionType),
        })
    }
}

impl Serialize for QuestionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What counts as the right answer to a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CorrectSpec {
    /// Index of the one correct choice.
    Single(usize),
    /// Every choice that must be selected, and nothing else.
    Set(BTreeSet<usize>),
}

impl CorrectSpec {
    /// Whether the choice at `index` is (one of) the correct answer(s).
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Single(correct) => *correct == index,
            Self::Set(correct) => correct.contains(&index),
        }
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let (single, set) = match self {
            Self::Single(correct) => (Some(*correct), None),
            Self::Set(correct) => (None, Some(correct.iter().copied())),
        };
        single.into_iter().chain(set.into_iter().flatten())
    }
}

/// Question as it appears on the wire, before validation.
#[derive(Deserialize)]
struct RawQuestion {
    prompt: String,
    #[serde(rename = "type")]
    kind: String,
    choices: Vec<String>,
    correct: RawCorrect,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCorrect {
    Single(usize),
    Many(Vec<usize>),
}

impl TryFrom<RawCorrect> for CorrectSpec {
    type Error = Error;

    fn try_from(raw: RawCorrect) -> Result<Self> {
        let indices = match raw {
            RawCorrect::Single(index) => return Ok(Self::Single(index)),
            RawCorrect::Many(indices) => indices,
        };

        let mut set = BTreeSet::new();
        for index in indices {
            if !set.insert(index) {
                return Err(Error::DuplicateCorrectIndex);
            }
        }

        Ok(Self::Set(set))
    }
}

/// A single validated quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    /// Text shown above the choices.
    pub(crate) prompt: Box<str>,
    /// Selection cardinality of this question.
    #[serde(rename = "type")]
    pub(crate) kind: QuestionKind,
    /// Choice labels. Their positions are the indices used everywhere else.
    pub(crate) choices: Box<[Box<str>]>,
    pub(crate) correct: CorrectSpec,
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw: RawQuestion) -> Result<Self> {
        let kind = raw.kind.parse()?;
        let correct = raw.correct.try_into()?;
        Self::new(raw.prompt, kind, raw.choices, correct)
    }
}

impl Question {
    pub fn new<P, I, C>(prompt: P, kind: QuestionKind, choices: I, correct: CorrectSpec) -> Result<Self>
    where
        P: Into<Box<str>>,
        I: IntoIterator<Item = C>,
        C: Into<Box<str>>,
    {
        let question = Self {
            prompt: prompt.into(),
            kind,
            choices: choices.into_iter().map(Into::into).collect(),
            correct,
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks that the correct answer agrees with the question type and the available choices.
    pub fn validate(&self) -> Result<()> {
        if self.kind == QuestionKind::TrueFalse && self.choices.len() != 2 {
            return Err(Error::TrueFalseChoiceCount);
        }

        match (&self.correct, self.kind.is_single_select()) {
            (CorrectSpec::Single(_), true) => (),
            (CorrectSpec::Set(set), false) if set.is_empty() => return Err(Error::EmptyCorrectSet),
            (CorrectSpec::Set(_), false) => (),
            _ => return Err(Error::MismatchedCorrectSpec),
        }

        if self.correct.indices().any(|index| index >= self.choices.len()) {
            return Err(Error::OutOfRangeChoiceIndex);
        }

        Ok(())
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub const fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn choices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.choices.iter().map(AsRef::as_ref)
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    pub const fn correct(&self) -> &CorrectSpec {
        &self.correct
    }
}

/// Ordered, non-empty list of questions. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>")]
pub struct QuizSet(pub(crate) Box<[Question]>);

impl TryFrom<Vec<Question>> for QuizSet {
    type Error = Error;

    fn try_from(questions: Vec<Question>) -> Result<Self> {
        Self::new(questions)
    }
}

impl QuizSet {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::EmptyQuiz);
        }
        Ok(Self(questions.into_boxed_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed quiz.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Question> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a QuizSet {
    type Item = &'a Question;
    type IntoIter = core::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

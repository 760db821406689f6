//! Built-in quiz used when no quiz file is configured.

use crate::quiz::{CorrectSpec, Question, QuestionKind, QuizSet};
use alloc::{boxed::Box, collections::BTreeSet, vec};

fn question(prompt: &str, kind: QuestionKind, choices: &[&str], correct: CorrectSpec) -> Question {
    Question {
        prompt: prompt.into(),
        kind,
        choices: choices.iter().copied().map(Box::from).collect(),
        correct,
    }
}

/// Five questions about the Harry Potter series. Answers: `3`, `2`, `{1, 2}`, `1`, `0`.
pub fn wizarding_world() -> QuizSet {
    QuizSet(
        vec![
            question(
                "Who played Ron Weasley?",
                QuestionKind::MultipleChoice,
                &["Daniel Radcliffe", "Tom Felton", "Matthew Lewis", "Rupert Grint"],
                CorrectSpec::Single(3),
            ),
            question(
                "Hagrid's pet spider was known by what name?",
                QuestionKind::MultipleChoice,
                &["Grey", "Hedwig", "Aragog", "Tom"],
                CorrectSpec::Single(2),
            ),
            question(
                "Who taught Defense Against the Dark Arts at Hogwarts? (more than one answer)",
                QuestionKind::MultipleAnswer,
                &["Sybill Trelawney", "Severus Snape", "Dolores Umbridge", "Silvanus Kettleburn"],
                CorrectSpec::Set(BTreeSet::from([1, 2])),
            ),
            question(
                "Tom Riddle is Voldemort's real name in the story?",
                QuestionKind::TrueFalse,
                &["False", "True"],
                CorrectSpec::Single(1),
            ),
            question(
                "What is the name of the school where the students study?",
                QuestionKind::MultipleChoice,
                &["Hogwarts", "Diagon Alley", "Gringotts", "Godric's Hollow"],
                CorrectSpec::Single(0),
            ),
        ]
        .into_boxed_slice(),
    )
}

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod render;
pub mod session;
pub mod summary;

use error::{Error, Result};
use model::{AnswerLog, CorrectSpec, Question, QuestionKind, QuizSet, Selection};

pub use render::{choice_render_state, ChoiceRenderState, Emphasis};
pub use session::{Outcome, Progress, Session};
pub use summary::Summary;

/// Applies a click on the choice at `picked` to the current selection.
///
/// Single-select kinds always yield `{picked}`. Multiple-answer questions flip the membership of
/// `picked` and keep everything else.
pub fn toggle_selection(current: &Selection, kind: QuestionKind, picked: usize) -> Selection {
    if kind.is_single_select() {
        Selection::single(picked)
    } else if current.contains(picked) {
        current.without(picked)
    } else {
        current.with(picked)
    }
}

/// Same as [`toggle_selection`], but rejects indices that the question does not have.
pub fn toggle_choice(question: &Question, current: &Selection, picked: usize) -> Result<Selection> {
    check_index(question, picked)?;
    Ok(toggle_selection(current, question.kind(), picked))
}

/// Whether the current question may be submitted.
pub fn can_advance(selection: &Selection) -> bool {
    !selection.is_empty()
}

/// Whether the selection is exactly the correct answer. No partial credit.
pub fn is_correct(question: &Question, selection: &Selection) -> bool {
    match question.correct() {
        CorrectSpec::Single(correct) => selection.len() == 1 && selection.contains(*correct),
        CorrectSpec::Set(correct) => selection.as_set() == correct,
    }
}

/// Counts the questions answered correctly. The log must hold one entry per question.
pub fn score(quiz: &QuizSet, answers: &AnswerLog) -> Result<usize> {
    if answers.len() != quiz.len() {
        return Err(Error::AnswerLogLengthMismatch { expected: quiz.len(), found: answers.len() });
    }

    Ok(quiz.iter().zip(answers).filter(|(question, selection)| is_correct(question, selection)).count())
}

/// Checks that a selection could have been built by toggling choices of `question`.
pub(crate) fn check_selection(question: &Question, selection: &Selection) -> Result<()> {
    if !can_advance(selection) {
        return Err(Error::EmptySelection);
    }

    if question.kind().is_single_select() && selection.len() > 1 {
        return Err(Error::TooManyChoices { count: selection.len() });
    }

    match selection.last() {
        Some(last) => check_index(question, last),
        None => Ok(()),
    }
}

pub(crate) fn check_index(question: &Question, index: usize) -> Result<()> {
    let count = question.choice_count();
    if index < count {
        Ok(())
    } else {
        Err(Error::OutOfRangeChoiceIndex { index, count })
    }
}

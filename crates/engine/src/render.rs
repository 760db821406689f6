use crate::error::Result;
use model::{Question, Selection};
use serde::Serialize;

/// What the view layer needs to know about one choice on the summary screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceRenderState {
    /// The choice is (one of) the correct answer(s).
    pub is_correct_choice: bool,
    /// The user picked this choice.
    pub is_selected: bool,
}

/// The four ways a choice can be highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    /// Correct and chosen.
    Hit,
    /// Chosen but wrong.
    Miss,
    /// Correct but not chosen.
    Overlooked,
    /// Neither chosen nor correct.
    Plain,
}

impl ChoiceRenderState {
    pub const fn emphasis(self) -> Emphasis {
        match (self.is_correct_choice, self.is_selected) {
            (true, true) => Emphasis::Hit,
            (false, true) => Emphasis::Miss,
            (true, false) => Emphasis::Overlooked,
            (false, false) => Emphasis::Plain,
        }
    }
}

pub fn choice_render_state(question: &Question, selection: &Selection, index: usize) -> Result<ChoiceRenderState> {
    crate::check_index(question, index)?;
    Ok(derive(question, selection, index))
}

pub(crate) fn derive(question: &Question, selection: &Selection, index: usize) -> ChoiceRenderState {
    ChoiceRenderState {
        is_correct_choice: question.correct().contains(index),
        is_selected: selection.contains(index),
    }
}

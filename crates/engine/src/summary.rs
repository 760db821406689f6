use crate::{
    render::{self, ChoiceRenderState, Emphasis},
    session::Outcome,
};
use alloc::vec::Vec;
use model::QuestionKind;
use serde::Serialize;

/// Everything the results screen shows, ready to be rendered or serialized.
#[derive(Debug, Serialize)]
pub struct Summary<'q> {
    /// Number of questions answered correctly.
    pub score: usize,
    /// Number of questions in the quiz.
    pub total: usize,
    pub questions: Vec<QuestionSummary<'q>>,
}

#[derive(Debug, Serialize)]
pub struct QuestionSummary<'q> {
    pub prompt: &'q str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Whether the submitted selection was exactly right.
    pub correct: bool,
    pub choices: Vec<ChoiceSummary<'q>>,
}

#[derive(Debug, Serialize)]
pub struct ChoiceSummary<'q> {
    pub label: &'q str,
    pub state: ChoiceRenderState,
    pub emphasis: Emphasis,
}

impl<'q> Summary<'q> {
    pub fn new(outcome: &Outcome<'q>) -> Self {
        let questions: Vec<_> = outcome
            .entries()
            .map(|(question, selection)| {
                let choices = question
                    .choices()
                    .enumerate()
                    .map(|(index, label)| {
                        let state = render::derive(question, selection, index);
                        ChoiceSummary { label, state, emphasis: state.emphasis() }
                    })
                    .collect();
                QuestionSummary {
                    prompt: question.prompt(),
                    kind: question.kind(),
                    correct: crate::is_correct(question, selection),
                    choices,
                }
            })
            .collect();

        let score = questions.iter().filter(|question| question.correct).count();
        Self { score, total: outcome.quiz().len(), questions }
    }
}

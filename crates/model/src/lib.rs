#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod fixture;
pub mod quiz;
pub mod selection;

pub use quiz::{CorrectSpec, Question, QuestionKind, QuizSet};
pub use selection::{AnswerLog, Selection};
